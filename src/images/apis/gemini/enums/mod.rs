pub mod gemini_model;
