//! Integration tests for rendering rows.
//!
//! These tests verify that:
//! - `#[derive(LogRow)]` renders fields in declaration order with `Display`
//! - `pii`, `rename` and `skip` options shape the line and `PII_FIELDS`
//! - a logger built from a row type's PII columns masks exactly those columns

use std::{
    fmt,
    io::{self, Write},
    sync::{Arc, Mutex},
};

use filtered_log::{format_row, LogRow, LoggerConfig, SensitiveFields, NULL_COLUMN};

#[derive(LogRow)]
struct User {
    #[log_row(pii)]
    name: String,
    #[log_row(pii)]
    email: String,
    #[log_row(pii)]
    phone: String,
    #[log_row(pii)]
    ssn: String,
    #[log_row(pii)]
    password: String,
    ip: String,
    last_login: String,
    user_agent: String,
}

fn marlene() -> User {
    User {
        name: "Marlene Wood".into(),
        email: "hwestiii@att.net".into(),
        phone: "(473) 401-4253".into(),
        ssn: "261-72-6780".into(),
        password: "K5?BMNv".into(),
        ip: "60ed:c396:2ff:244:bbd0:9208:26f2:93ea".into(),
        last_login: "2019-11-14 06:14:24".into(),
        user_agent: "Mozilla/5.0".into(),
    }
}

#[test]
fn test_derived_row_renders_in_declaration_order() {
    let row = marlene();
    assert_eq!(
        row.to_log_line(),
        "name=Marlene Wood; email=hwestiii@att.net; phone=(473) 401-4253; \
         ssn=261-72-6780; password=K5?BMNv; ip=60ed:c396:2ff:244:bbd0:9208:26f2:93ea; \
         last_login=2019-11-14 06:14:24; user_agent=Mozilla/5.0; "
    );
}

#[test]
fn test_pii_columns_are_listed() {
    assert_eq!(User::PII_FIELDS, ["name", "email", "phone", "ssn", "password"]);
}

#[test]
fn test_rename_skip_and_optional_columns() {
    #[derive(LogRow)]
    struct Account {
        id: u64,
        #[log_row(pii, rename = "mail")]
        email: String,
        #[log_row(skip)]
        #[allow(dead_code)]
        password_hash: Vec<u8>,
        nickname: Option<String>,
        age: Option<u8>,
    }

    let account = Account {
        id: 7,
        email: "bob@dylan.com".into(),
        password_hash: vec![1, 2, 3],
        nickname: None,
        age: Some(42),
    };

    assert_eq!(Account::PII_FIELDS, ["mail"]);
    assert_eq!(
        account.columns(),
        vec![
            ("id", "7".to_string()),
            ("mail", "bob@dylan.com".to_string()),
            ("nickname", NULL_COLUMN.to_string()),
            ("age", "42".to_string()),
        ]
    );
}

#[test]
fn test_generic_row() {
    struct Masked;

    impl fmt::Display for Masked {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("masked")
        }
    }

    #[derive(LogRow)]
    struct Row<T> {
        #[log_row(pii)]
        value: T,
        backup: Option<T>,
    }

    let row = Row {
        value: Masked,
        backup: Some(Masked),
    };
    assert_eq!(row.to_log_line(), "value=masked; backup=masked; ");
    assert_eq!(Row::<Masked>::PII_FIELDS, ["value"]);
}

#[test]
fn test_format_row_matches_derived_rendering() {
    let row = marlene();
    assert_eq!(format_row(row.columns()), row.to_log_line());
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_logged_row_masks_its_pii_columns() {
    let buffer = SharedBuffer::default();
    let logger = LoggerConfig::new("user_data")
        .with_fields(SensitiveFields::from_row::<User>())
        .build_with_writer(buffer.clone())
        .unwrap();

    logger.log_row(&marlene());

    let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let (_, message) = written.trim_end_matches('\n').split_once(": ").unwrap();
    assert_eq!(
        message,
        "name=***; email=***; phone=***; ssn=***; password=***; \
         ip=60ed:c396:2ff:244:bbd0:9208:26f2:93ea; last_login=2019-11-14 06:14:24; \
         user_agent=Mozilla/5.0; "
    );
}

#[test]
fn test_headers_and_values_from_a_result_set() {
    let headers = ["name", "email", "role"];
    let values = ["Alice", "alice@example.com", "admin"];
    assert_eq!(
        format_row(headers.iter().zip(values.iter())),
        "name=Alice; email=alice@example.com; role=admin; "
    );
}
