//! Student record and the request/response shapes built around it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `students` table. `student_id` is supplied by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    #[serde(deserialize_with = "lax::int")]
    pub student_id: i32,
    pub name: String,
    #[serde(deserialize_with = "lax::float")]
    pub score: f64,
    pub address: Option<String>,
}

/// Replacement body for an update. Any `student_id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct StudentChanges {
    pub name: String,
    #[serde(deserialize_with = "lax::float")]
    pub score: f64,
    pub address: Option<String>,
}

impl Student {
    pub fn apply(&mut self, changes: StudentChanges) {
        self.name = changes.name;
        self.score = changes.score;
        self.address = changes.address;
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentList {
    pub students: Vec<Student>,
}

/// Numeric fields accept numbers or numeric strings; integers also accept
/// whole floats such as `1.0`. Anything else is a data error.
mod lax {
    use serde::{de::Error, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let n = match &value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        n.and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| D::Error::custom(format!("expected a 32-bit integer, got {}", value)))
    }

    pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let n = match &value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|f| f.is_finite())
            .ok_or_else(|| D::Error::custom(format!("expected a number, got {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_address_deserializes_as_none_and_serializes_as_null() {
        let s: Student = serde_json::from_str(r#"{"student_id":1,"name":"Ann","score":91.5}"#).unwrap();
        assert_eq!(s.address, None);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["address"], serde_json::Value::Null);
    }

    #[test]
    fn apply_keeps_id_and_overwrites_the_rest() {
        let mut s = Student {
            student_id: 4,
            name: "Bo".into(),
            score: 50.0,
            address: Some("Elm St".into()),
        };
        let changes: StudentChanges =
            serde_json::from_str(r#"{"student_id":99,"name":"Bob","score":77.25}"#).unwrap();
        s.apply(changes);
        assert_eq!(s.student_id, 4);
        assert_eq!(s.name, "Bob");
        assert_eq!(s.score, 77.25);
        assert_eq!(s.address, None);
    }

    #[test]
    fn numeric_strings_and_whole_floats_are_coerced() {
        let s: Student =
            serde_json::from_str(r#"{"student_id":"12","name":"Cy","score":"91.5"}"#).unwrap();
        assert_eq!((s.student_id, s.score), (12, 91.5));
        let s: Student = serde_json::from_str(r#"{"student_id":1.0,"name":"Cy","score":80}"#).unwrap();
        assert_eq!((s.student_id, s.score), (1, 80.0));
    }

    #[test]
    fn non_numeric_and_fractional_ids_are_rejected() {
        assert!(serde_json::from_str::<Student>(r#"{"student_id":"one","name":"A","score":1}"#).is_err());
        assert!(serde_json::from_str::<Student>(r#"{"student_id":1.5,"name":"A","score":1}"#).is_err());
        assert!(serde_json::from_str::<Student>(r#"{"student_id":3000000000,"name":"A","score":1}"#).is_err());
        assert!(serde_json::from_str::<Student>(r#"{"student_id":1,"name":"A","score":"high"}"#).is_err());
        assert!(serde_json::from_str::<Student>(r#"{"student_id":1,"name":"A","score":null}"#).is_err());
    }
}
