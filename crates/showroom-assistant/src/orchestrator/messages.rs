//! Customer-facing texts produced by the orchestrator.

use crate::RunStatus;

pub const TIMEOUT: &str = "Заявката отне твърде дълго. Моля, задайте въпроса си отново.";

/// Stands in for a completed run whose thread has no message.
pub const EMPTY_RESPONSE: &str = "Получен е празен отговор.";

pub fn run_ended(status: RunStatus) -> String {
    format!("Грешка: Обработката спря със статус '{status}'.")
}
