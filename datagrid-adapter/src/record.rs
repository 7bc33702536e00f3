use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;

use datagrid::Value;

/// Field access on a plain data record.
///
/// Missing fields read as [`Value::Null`].
pub trait Record {
    fn field(&self, name: &str) -> Value;
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Value {
        (**self).field(name)
    }
}

impl<T: Record + ?Sized> Record for Arc<T> {
    fn field(&self, name: &str) -> Value {
        (**self).field(name)
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(feature = "std")]
impl<S: core::hash::BuildHasher> Record for std::collections::HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(feature = "json")]
mod json {
    use alloc::string::{String, ToString};

    use datagrid::Value;

    use super::Record;

    fn to_value(v: &serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            other => Value::Text(other.to_string()),
        }
    }

    impl Record for serde_json::Map<String, serde_json::Value> {
        fn field(&self, name: &str) -> Value {
            self.get(name).map(to_value).unwrap_or_default()
        }
    }

    impl Record for serde_json::Value {
        fn field(&self, name: &str) -> Value {
            self.get(name).map(to_value).unwrap_or_default()
        }
    }
}
