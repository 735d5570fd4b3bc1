use serde::{Deserialize, Serialize};

/// Number of options every generated question must carry.
pub const QUIZ_OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizItem {
    pub id: u32, // 1-based, sequential within one quiz
    pub question: String,
    pub options: Vec<String>,
    pub answer: String, // always one of `options`
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_item_round_trip_serialization() {
        let item = QuizItem {
            id: 1,
            question: "What do bees collect?".to_string(),
            options: vec![
                "Pollen".to_string(),
                "Sand".to_string(),
                "Iron".to_string(),
                "Glass".to_string(),
            ],
            answer: "Pollen".to_string(),
        };

        let json = serde_json::to_string(&item).expect("item should serialize");
        let parsed: QuizItem = serde_json::from_str(&json).expect("item should deserialize");
        assert_eq!(item, parsed);
    }

    #[test]
    fn quiz_item_uses_wire_field_names() {
        let item = QuizItem {
            id: 3,
            question: "Q".to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            answer: "B".to_string(),
        };

        let value = serde_json::to_value(&item).expect("item should serialize");
        assert!(value.get("question").is_some());
        assert!(value.get("options").is_some());
        assert!(value.get("answer").is_some());
    }
}
