mod controller;
mod log;

pub use controller::ChatController;
pub use log::{
    MessageLog, TurnOutcome, TurnTicket, DEFAULT_RESULT_SUMMARY, RECOMMENDATION_ERROR_NOTICE,
    WELCOME_MESSAGE,
};
