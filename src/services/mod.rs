pub mod gemini;
pub mod predictor;
