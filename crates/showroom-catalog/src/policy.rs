//! Availability filter, name filter, price ordering, and truncation.

use crate::feed::FeedItem;
use crate::price::parse_price;
use crate::CarRecord;

/// Only items whose availability is exactly this value are offered.
pub const IN_STOCK: &str = "in stock";

/// Hard cap on cars per result, whatever the configured limit.
pub const MAX_RESULTS: usize = 4;

impl CarRecord {
    /// Build a record from a feed entry, substituting placeholders for
    /// missing fields instead of dropping the entry.
    pub fn from_item(item: FeedItem) -> Self {
        let model = item
            .title
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| "N/A".into());
        let price = item
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_else(|| "N/A".into());
        let numeric_price = parse_price(Some(&price));

        Self {
            model,
            price,
            link: item.link.unwrap_or_else(|| "#".into()),
            image_url: item.image_link.unwrap_or_default(),
            numeric_price,
        }
    }

    /// Case-insensitive substring match on the model name.
    pub fn matches_model(&self, filter: &str) -> bool {
        self.model.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Apply the lookup policy to raw feed entries.
///
/// Keeps in-stock entries, narrows them by `model_filter` when one is
/// given, orders by ascending numeric price (feed order breaks ties), and
/// keeps at most `limit` of them (never more than [`MAX_RESULTS`]).
pub fn select_cars(items: Vec<FeedItem>, model_filter: Option<&str>, limit: usize) -> Vec<CarRecord> {
    let wanted = model_filter.filter(|f| !f.is_empty());

    let mut cars: Vec<CarRecord> = items
        .into_iter()
        .filter(|item| item.availability.as_deref() == Some(IN_STOCK))
        .map(CarRecord::from_item)
        .filter(|car| wanted.is_none_or(|f| car.matches_model(f)))
        .collect();

    // `sort_by` is stable, so equal prices keep feed order.
    cars.sort_by(|a, b| a.numeric_price.total_cmp(&b.numeric_price));
    cars.truncate(limit.min(MAX_RESULTS));
    cars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, price: &str, availability: &str) -> FeedItem {
        FeedItem {
            title: Some(title.into()),
            description: Some(price.into()),
            link: Some(format!("https://sale.example.com/{title}")),
            image_link: Some(format!("https://img.example.com/{title}.jpg")),
            availability: Some(availability.into()),
        }
    }

    fn models(cars: &[CarRecord]) -> Vec<&str> {
        cars.iter().map(|c| c.model.as_str()).collect()
    }

    #[test]
    fn orders_by_price_with_unpriced_last() {
        let items = vec![
            item("Peugeot 2008", "25 000 лв", IN_STOCK),
            item("Peugeot 408", "N/A", IN_STOCK),
            item("Peugeot 208", "18 500,50 лв", IN_STOCK),
        ];
        let cars = select_cars(items, None, MAX_RESULTS);
        assert_eq!(models(&cars), ["Peugeot 208", "Peugeot 2008", "Peugeot 408"]);
        assert_eq!(cars[0].numeric_price, 18_500.5);
        assert_eq!(cars[1].numeric_price, 25_000.0);
        assert_eq!(cars[2].numeric_price, f64::INFINITY);
    }

    #[test]
    fn never_returns_more_than_the_cap() {
        let items: Vec<FeedItem> = (0..10)
            .map(|i| item(&format!("Car {i}"), &format!("{} 000 лв", 30 - i), IN_STOCK))
            .collect();
        let cars = select_cars(items.clone(), None, 10);
        assert_eq!(cars.len(), MAX_RESULTS);
        assert!(cars.windows(2).all(|w| w[0].numeric_price <= w[1].numeric_price));

        assert_eq!(select_cars(items, None, 2).len(), 2);
    }

    #[test]
    fn equal_prices_keep_feed_order() {
        let items = vec![
            item("First", "20 000 лв", IN_STOCK),
            item("Second", "20 000 лв", IN_STOCK),
            item("Third", "N/A", IN_STOCK),
            item("Fourth", "N/A", IN_STOCK),
        ];
        let cars = select_cars(items, None, MAX_RESULTS);
        assert_eq!(models(&cars), ["First", "Second", "Third", "Fourth"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let items = || vec![item("Peugeot 208 GT", "30 000 лв", IN_STOCK)];
        assert_eq!(select_cars(items(), Some("208"), 4).len(), 1);
        assert_eq!(select_cars(items(), Some("peugeot"), 4).len(), 1);
        assert_eq!(select_cars(items(), Some("GT"), 4).len(), 1);
        assert_eq!(select_cars(items(), Some(""), 4).len(), 1);
        assert_eq!(select_cars(items(), None, 4).len(), 1);
        assert!(select_cars(items(), Some("308"), 4).is_empty());
    }

    #[test]
    fn cyrillic_filter_is_case_insensitive() {
        let items = vec![item("Пежо Рифтър", "40 000 лв", IN_STOCK)];
        assert_eq!(select_cars(items, Some("рифтър"), 4).len(), 1);
    }

    #[test]
    fn only_exact_in_stock_availability_passes() {
        let mut missing = item("Missing", "1 лв", IN_STOCK);
        missing.availability = None;
        let items = vec![
            item("Exact", "10 лв", "in stock"),
            item("Cased", "1 лв", "In Stock"),
            item("Spaced", "1 лв", " in stock"),
            item("Misspelled", "1 лв", "in_stock"),
            item("Sold", "1 лв", "out of stock"),
            missing,
        ];
        let cars = select_cars(items, None, MAX_RESULTS);
        assert_eq!(models(&cars), ["Exact"]);
    }

    #[test]
    fn missing_fields_become_placeholders() {
        let item = FeedItem {
            availability: Some(IN_STOCK.into()),
            ..FeedItem::default()
        };
        let car = CarRecord::from_item(item);
        assert_eq!(car.model, "N/A");
        assert_eq!(car.price, "N/A");
        assert_eq!(car.link, "#");
        assert_eq!(car.image_url, "");
        assert_eq!(car.numeric_price, f64::INFINITY);
    }

    #[test]
    fn selection_is_deterministic() {
        let items = vec![
            item("A", "3 лв", IN_STOCK),
            item("B", "1 лв", IN_STOCK),
            item("C", "N/A", IN_STOCK),
            item("D", "2 лв", IN_STOCK),
            item("E", "1 лв", IN_STOCK),
        ];
        let first = select_cars(items.clone(), None, MAX_RESULTS);
        let second = select_cars(items, None, MAX_RESULTS);
        assert_eq!(first, second);
        assert_eq!(models(&first), ["B", "E", "D", "A"]);
    }
}
