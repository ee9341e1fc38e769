//! Builds parameterized statements against the accounts table.
//! Identifiers are compile-time constants; every caller value becomes a `$n` parameter.

use super::params::BindValue;
use crate::model::Account;

pub const ACCOUNTS_TABLE: &str = "accounts_db";

const SELECT_COLUMNS: &str = "uid, COALESCE(firstname, '') AS firstname, COALESCE(lastname, '') AS lastname, \
     COALESCE(password, '') AS password, COALESCE(mobilenumber, 0) AS mobilenumber";

/// Mutable account columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    FirstName,
    LastName,
    MobileNumber,
    Password,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::FirstName => "firstname",
            Column::LastName => "lastname",
            Column::MobileNumber => "mobilenumber",
            Column::Password => "password",
        }
    }
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Non-default fields of `patch`, in column order. `id` is never assignable.
pub fn assignments(patch: &Account) -> Vec<(Column, BindValue)> {
    let mut out = Vec::with_capacity(4);
    if !patch.firstname.is_empty() {
        out.push((Column::FirstName, BindValue::Text(patch.firstname.clone())));
    }
    if !patch.lastname.is_empty() {
        out.push((Column::LastName, BindValue::Text(patch.lastname.clone())));
    }
    if patch.mobilenumber != 0 {
        out.push((Column::MobileNumber, BindValue::BigInt(patch.mobilenumber)));
    }
    if !patch.password.is_empty() {
        out.push((Column::Password, BindValue::Text(patch.password.clone())));
    }
    out
}

/// INSERT of all four fields, returning the assigned uid.
pub fn insert(account: &Account) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols = [
        (Column::FirstName, BindValue::Text(account.firstname.clone())),
        (Column::LastName, BindValue::Text(account.lastname.clone())),
        (Column::MobileNumber, BindValue::BigInt(account.mobilenumber)),
        (Column::Password, BindValue::Text(account.password.clone())),
    ];
    let mut names = Vec::with_capacity(cols.len());
    let mut placeholders = Vec::with_capacity(cols.len());
    for (col, val) in cols {
        let n = q.push_param(val);
        names.push(col.name());
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING uid",
        ACCOUNTS_TABLE,
        names.join(", "),
        placeholders.join(", ")
    );
    q
}

/// SELECT all rows ordered by key.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {} ORDER BY uid", SELECT_COLUMNS, ACCOUNTS_TABLE);
    q
}

/// SELECT by key.
pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::BigInt(id));
    q.sql = format!("SELECT {} FROM {} WHERE uid = ${}", SELECT_COLUMNS, ACCOUNTS_TABLE, n);
    q
}

/// UPDATE by key, assigning only the non-default fields of `patch`.
/// Returns None when there is nothing to assign; callers treat that as a no-op.
pub fn update(id: i64, patch: &Account) -> Option<QueryBuf> {
    let sets = assignments(patch);
    if sets.is_empty() {
        return None;
    }
    let mut q = QueryBuf::new();
    let set_clause = sets
        .into_iter()
        .map(|(col, val)| {
            let n = q.push_param(val);
            format!("{} = ${}", col.name(), n)
        })
        .collect::<Vec<_>>()
        .join(", ");
    let id_param = q.push_param(BindValue::BigInt(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE uid = ${}",
        ACCOUNTS_TABLE, set_clause, id_param
    );
    Some(q)
}

/// DELETE by key.
pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::BigInt(id));
    q.sql = format!("DELETE FROM {} WHERE uid = ${}", ACCOUNTS_TABLE, n);
    q
}
