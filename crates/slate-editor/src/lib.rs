pub mod decode;
pub mod editor;
pub mod input;
pub mod notice;
pub mod shortcuts;
pub mod tools;

pub use decode::{DecodeRequest, DecodeTarget, DecodeTicket};
pub use editor::{Editor, EditorResponse};
pub use input::{InputEvent, Modifiers, Viewport};
pub use notice::{Notice, NoticeLevel};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use tools::ToolKind;
