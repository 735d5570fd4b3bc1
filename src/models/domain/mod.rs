pub mod quiz;
pub mod video_script;

pub use quiz::QuizItem;
pub use video_script::VideoScript;
