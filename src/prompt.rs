//! Prompt assembly for the three request paths. Plain concatenation in a
//! fixed order: persona, constraints, history block, latest input, output
//! format. App text is embedded verbatim.

use crate::models::health::PredictionSummary;

pub fn chat_prompt(message: &str, history: &str) -> String {
    let mut prompt = String::from(
        "You are Intelli, the AI assistant inside a messaging app called IntelliChat.\n\
         Be concise, friendly, helpful, and explain things in simple language.\n",
    );
    push_history(&mut prompt, history);
    prompt.push_str("\nUser: ");
    prompt.push_str(message);
    prompt.push('\n');
    prompt
}

pub fn smart_reply_prompt(history: &str, last_message: &str) -> String {
    let mut prompt = String::from(
        "You suggest quick replies inside a messaging app called IntelliChat.\n\
         Offer three distinct, casual replies the user could send next.\n\
         Keep each one short, under ten words.\n",
    );
    push_history(&mut prompt, history);
    prompt.push_str("\nLast message received: ");
    prompt.push_str(last_message);
    prompt.push_str("\n\nRespond with a JSON array of exactly three strings and nothing else.\n");
    prompt
}

pub fn health_prompt(
    question: &str,
    prediction: Option<&PredictionSummary>,
    symptoms: &[String],
) -> String {
    let mut prompt = String::from(
        "You are the health assistant inside a messaging app called IntelliChat.\n\
         Offer general, educational health information only. You do not diagnose,\n\
         prescribe, or replace a doctor, and you say so when it matters.\n",
    );
    if let Some(p) = prediction {
        prompt.push_str("\nA screening model suggested: ");
        prompt.push_str(&p.disease);
        prompt.push_str(&format!(" (confidence {})\n", format_confidence(p.confidence)));
        if !p.top_predictions.is_empty() {
            prompt.push_str("Other possibilities it ranked:\n");
            for alt in &p.top_predictions {
                prompt.push_str(&format!(
                    "- {} ({})\n",
                    alt.disease,
                    format_confidence(alt.confidence)
                ));
            }
        }
    }
    if !symptoms.is_empty() {
        prompt.push_str("\nReported symptoms: ");
        prompt.push_str(&symptoms.join(", "));
        prompt.push('\n');
    }
    let question = question.trim();
    if question.is_empty() {
        prompt.push_str("\nExplain briefly what this assessment could mean in everyday terms.\n");
    } else {
        prompt.push_str("\nUser question: ");
        prompt.push_str(question);
        prompt.push('\n');
    }
    prompt.push_str("\nAnswer in a few short sentences of plain language.\n");
    prompt
}

/// `0.8234` -> `"82.34%"`
pub fn format_confidence(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn push_history(prompt: &mut String, history: &str) {
    let history = history.trim();
    if !history.is_empty() {
        prompt.push_str("\nConversation so far:\n");
        prompt.push_str(history);
        prompt.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health::AlternativePrediction;

    #[test]
    fn confidence_formats_with_two_decimals() {
        assert_eq!(format_confidence(0.8234), "82.34%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
    }

    #[test]
    fn chat_prompt_embeds_message_verbatim() {
        let prompt = chat_prompt("what's an API?", "");
        assert!(prompt.contains("User: what's an API?"));
        assert!(!prompt.contains("Conversation so far"));
    }

    #[test]
    fn chat_prompt_includes_history_block_when_present() {
        let prompt = chat_prompt("and then?", "User: hi\nIntelli: hello!");
        assert!(prompt.contains("Conversation so far:\nUser: hi\nIntelli: hello!"));
    }

    #[test]
    fn smart_reply_prompt_asks_for_json_array() {
        let prompt = smart_reply_prompt("", "are you coming tonight?");
        assert!(prompt.contains("Last message received: are you coming tonight?"));
        assert!(prompt.contains("JSON array of exactly three strings"));
    }

    #[test]
    fn health_prompt_carries_symptoms_verbatim() {
        let symptoms = vec!["fever".to_string(), "cough".to_string()];
        let prompt = health_prompt("should I worry?", None, &symptoms);
        assert!(prompt.contains("fever"));
        assert!(prompt.contains("cough"));
        assert!(prompt.contains("User question: should I worry?"));
    }

    #[test]
    fn health_prompt_formats_prediction_block() {
        let prediction = PredictionSummary {
            disease: "Influenza".to_string(),
            confidence: 0.8234,
            top_predictions: vec![AlternativePrediction {
                disease: "Common Cold".to_string(),
                confidence: 0.1,
            }],
        };
        let prompt = health_prompt("", Some(&prediction), &[]);
        assert!(prompt.contains("Influenza (confidence 82.34%)"));
        assert!(prompt.contains("- Common Cold (10.00%)"));
        assert!(prompt.contains("everyday terms"));
    }
}
