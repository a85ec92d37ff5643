use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course offered online. The id is chosen by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Course {
    #[serde(rename = "CourseID")]
    #[sqlx(rename = "courseid")]
    pub course_id: i64,
    #[serde(rename = "CourseName")]
    #[sqlx(rename = "coursename")]
    pub course_name: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "ImageURL")]
    pub image_url: String,
}

/// Body of a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedCourse {
    #[serde(rename = "CourseID")]
    pub course_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys_match_field_names() {
        let course = Course {
            course_id: 1,
            course_name: "Intro".to_string(),
            price: 49.99,
            image_url: "http://x/1.png".to_string(),
        };

        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["CourseID"], 1);
        assert_eq!(value["CourseName"], "Intro");
        assert_eq!(value["Price"], 49.99);
        assert_eq!(value["ImageURL"], "http://x/1.png");
    }

    #[test]
    fn test_decode_rejects_string_id() {
        let body = r#"{"CourseID":"one","CourseName":"Intro","Price":1.0,"ImageURL":""}"#;
        assert!(serde_json::from_str::<Course>(body).is_err());
    }
}
