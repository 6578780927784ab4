pub mod edit_instruction;
