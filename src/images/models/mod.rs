pub mod model_summary;
pub mod process_image_response;
