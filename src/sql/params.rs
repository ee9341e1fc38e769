//! Bind values for account statements.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value bound as a statement parameter. Never rendered into SQL text.
#[derive(Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    BigInt(i64),
}

impl std::fmt::Debug for BindValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindValue::Text(s) => write!(f, "Text({} bytes)", s.len()),
            BindValue::BigInt(n) => write!(f, "BigInt({})", n),
        }
    }
}

impl<'q> Encode<'q, Postgres> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            BindValue::Text(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)
            }
            BindValue::BigInt(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            BindValue::Text(_) => <String as Type<Postgres>>::type_info(),
            BindValue::BigInt(_) => <i64 as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for BindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_text_content() {
        let v = BindValue::Text("hunter2".into());
        assert_eq!(format!("{:?}", v), "Text(7 bytes)");
        assert_eq!(format!("{:?}", BindValue::BigInt(9)), "BigInt(9)");
    }
}
