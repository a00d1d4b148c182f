pub mod button;
pub mod error_message;
pub mod image_dropzone;
pub mod input;

pub use button::Button;
pub use error_message::ErrorMessage;
pub use image_dropzone::ImageDropzone;
pub use input::Input;
