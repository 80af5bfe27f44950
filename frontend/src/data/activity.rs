#[derive(Clone, Debug, PartialEq)]
pub struct ActivityItem {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub ago: &'static str,
}

impl ActivityItem {
    pub fn endpoint(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    pub fn badge_class(&self) -> &'static str {
        match self.status {
            200..=299 => "badge-ok",
            400.. => "badge-error",
            _ => "badge-warn",
        }
    }
}

pub fn recent_activity() -> Vec<ActivityItem> {
    [
        ("GET", "/v1/whales", 200, "2 min ago"),
        ("GET", "/v1/whales/123", 200, "5 min ago"),
        ("GET", "/v1/sightings", 200, "12 min ago"),
        ("POST", "/v1/alerts", 201, "18 min ago"),
        ("GET", "/v1/whales", 429, "1 hr ago"),
    ]
    .into_iter()
    .map(|(method, path, status, ago)| ActivityItem {
        method,
        path,
        status,
        ago,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_follow_status() {
        let items = recent_activity();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].endpoint(), "GET /v1/whales");
        assert_eq!(items[3].badge_class(), "badge-ok");
        assert_eq!(items[4].badge_class(), "badge-error");
        let redirect = ActivityItem {
            status: 304,
            ..items[0].clone()
        };
        assert_eq!(redirect.badge_class(), "badge-warn");
    }
}
