/// Marker trait for intents: key presses translated into component actions,
/// such as moving focus, selecting a row, or confirming a dialog.
pub trait Intent: 'static {}
