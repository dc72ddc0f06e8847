//! User-facing (Bulgarian) summaries attached to every lookup result.

pub const CARS_FOUND: &str = "Ето наличните автомобили, които отговарят на вашето търсене:";
pub const NO_CARS: &str = "За съжаление, в момента няма налични автомобили.";
pub const FEED_TIMEOUT: &str = "Сървърът на Peugeot не отговори навреме. Моля, опитайте пак.";
pub const FEED_FAILURE: &str = "Възникна грешка при извличането на данните.";

pub fn no_cars_matching(filter: &str) -> String {
    format!("За съжаление, в момента няма налични автомобили с филтър '{filter}'.")
}
