//! Instructional prompt and output schema for deck generation.

/// The deck must fill a 45-minute slot.
pub const TARGET_DURATION_MINUTES: u32 = 45;

/// Slide count range requested from the model. Not enforced on the result.
pub const MIN_SLIDES: u32 = 12;
pub const MAX_SLIDES: u32 = 15;

/// Fixed instruction establishing the analyst persona, the time budget, the
/// slide count range, and the language rule, closed with the strict-JSON
/// requirement.
pub fn build_prompt(topic: &str) -> String {
    format!(
        r#"You are a senior financial analyst and investment banker.
Create a comprehensive presentation structure for a {TARGET_DURATION_MINUTES}-minute university-level or investor-level presentation.

The Topic is: "{topic}"

Context:
- The presentation must last {TARGET_DURATION_MINUTES} minutes.
- It must be deeply analytical, citing specific examples (like Nvidia, iFlytek, Cambricon if relevant to the topic).
- It must balance the "Efficient Market Hypothesis" against "Irrational Exuberance/Bubbles".
- Include {MIN_SLIDES}-{MAX_SLIDES} detailed slides to cover the time.
- Content must be in the language of the topic provided.

Output strictly in JSON format conforming to the schema.
For 'visualSuggestion', describe a chart (e.g., 'Line chart comparing PE ratios of Nvidia vs Historical Bubble').
For 'speakerNotes', write a concise but detailed script (~150 words per slide) that the presenter can read.
"#
    )
}

/// JSON schema the service is constrained to. Field names and the required
/// sets mirror the deck model exactly; any drift breaks deserialization on
/// our side and schema enforcement on theirs.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING" },
            "totalDuration": { "type": "STRING" },
            "slides": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "bulletPoints": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        },
                        "speakerNotes": { "type": "STRING" },
                        "visualSuggestion": { "type": "STRING" },
                        "estimatedDuration": { "type": "STRING" }
                    },
                    "required": [
                        "title",
                        "bulletPoints",
                        "speakerNotes",
                        "visualSuggestion",
                        "estimatedDuration"
                    ]
                }
            }
        },
        "required": ["topic", "totalDuration", "slides"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_topic_and_contract_constants() {
        let prompt = build_prompt("AI stock mania");
        assert!(prompt.contains("\"AI stock mania\""));
        assert!(prompt.contains("45-minute"));
        assert!(prompt.contains("12-15 detailed slides"));
        assert!(prompt.contains("strictly in JSON"));
    }

    #[test]
    fn schema_requires_every_deck_field() {
        let schema = response_schema();
        assert_eq!(
            schema["required"],
            serde_json::json!(["topic", "totalDuration", "slides"])
        );
        let slide = &schema["properties"]["slides"]["items"];
        assert_eq!(
            slide["required"],
            serde_json::json!([
                "title",
                "bulletPoints",
                "speakerNotes",
                "visualSuggestion",
                "estimatedDuration"
            ])
        );
        assert_eq!(slide["properties"]["bulletPoints"]["type"], "ARRAY");
    }
}
