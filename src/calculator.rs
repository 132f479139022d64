/// the closed set of button labels the calculator accepts
pub mod command;
/// the calculator state machine: display buffer, history log and the
/// dispatcher mapping button presses to engine calls
pub mod dispatch;
/// keyword matcher for the free-text query box
pub mod nl;
