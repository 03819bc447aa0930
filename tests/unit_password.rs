use keyward::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_emits_a_bcrypt_string() {
    let hash = hash_password("hunter2hunter2").unwrap();

    assert!(hash.starts_with("$2"));
    assert_ne!(hash, "hunter2hunter2");
}

#[test]
fn test_verify_password_accepts_the_original() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert!(verify_password("correct horse battery staple", &hash).unwrap());
}

#[test]
fn test_verify_password_rejects_a_wrong_password() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert!(!verify_password("incorrect horse", &hash).unwrap());
}

#[test]
fn test_verify_password_errors_on_garbage_hash() {
    assert!(verify_password("whatever", "not-a-bcrypt-hash").is_err());
}

#[test]
fn test_hashing_twice_salts_differently() {
    let first = hash_password("repeat-after-me").unwrap();
    let second = hash_password("repeat-after-me").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("repeat-after-me", &first).unwrap());
    assert!(verify_password("repeat-after-me", &second).unwrap());
}

#[test]
fn test_verify_password_is_case_sensitive() {
    let hash = hash_password("Password123").unwrap();

    assert!(!verify_password("password123", &hash).unwrap());
    assert!(!verify_password("PASSWORD123", &hash).unwrap());
}

#[test]
fn test_hash_password_handles_symbols_and_unicode() {
    for password in ["p@ss w0rd!#$%^&*()", "pärölâ密码", "tab\tseparated"] {
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
    }
}
