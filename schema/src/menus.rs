use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Logical identity of a menu owned by the dialog/menu subsystem.
///
/// The string form is what the menu subsystem reports as its active menu name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum MenuName {
    /// Scrolling text box used for announcements and yes/no prompts
    GeneralText,
}
