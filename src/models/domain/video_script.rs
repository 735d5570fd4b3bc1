use std::fmt;

use serde::{Deserialize, Serialize};

/// Section markers of the two-part script layout the model is instructed to
/// produce. The parser splits on these and the renderer writes them back out.
pub const EXPLANATION_MARKER: &str = "EXPLANATION:";
pub const FRAMES_MARKER: &str = "FRAMES:";

/// A parsed video script: a short topic explanation followed by visual frame
/// descriptions. The prompt asks for exactly 5 frames, but the model is not
/// trusted on that, so consumers must handle any frame count.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoScript {
    pub explanation: String,
    pub frames: Vec<String>,
}

impl fmt::Display for VideoScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", EXPLANATION_MARKER, self.explanation)?;
        write!(f, "{FRAMES_MARKER}")?;
        for (index, frame) in self.frames.iter().enumerate() {
            write!(f, "\n{}. {}", index + 1, frame)?;
        }
        Ok(())
    }
}
