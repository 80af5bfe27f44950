use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

pub const KEY_PREFIX: &str = "mk_live_";
const KEY_BODY_LEN: usize = 32;
const KEY_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const MASK: &str = "••••••••••••••••••••••••";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error("Key name is required")]
    EmptyName,
    #[error("No key with id {0}")]
    NotFound(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiKey {
    pub id: u32,
    pub name: String,
    pub key: String,
    pub created: NaiveDate,
    pub last_used: Option<NaiveDate>,
    pub visible: bool,
}

impl ApiKey {
    /// What the key list shows for this key right now.
    pub fn display(&self) -> String {
        if self.visible {
            self.key.clone()
        } else {
            mask_key(&self.key)
        }
    }

    pub fn last_used_label(&self) -> String {
        self.last_used
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Never".to_string())
    }
}

pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    let body: String = (0..KEY_BODY_LEN)
        .map(|_| KEY_CHARSET[rng.gen_range(0..KEY_CHARSET.len())] as char)
        .collect();
    format!("{}{}", KEY_PREFIX, body)
}

/// First eight characters, then a fixed-width mask.
pub fn mask_key(key: &str) -> String {
    let head: String = key.chars().take(8).collect();
    format!("{}{}", head, MASK)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiKeyStore {
    keys: Vec<ApiKey>,
    next_id: u32,
}

impl Default for ApiKeyStore {
    fn default() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        Self {
            keys: vec![
                ApiKey {
                    id: 1,
                    name: "Production Key".to_string(),
                    key: "mk_live_7f3d8a2b1c4e5f6g7h8i9j0k1l2m3n4o".to_string(),
                    created: date(2024, 1, 10),
                    last_used: Some(date(2024, 1, 15)),
                    visible: false,
                },
                ApiKey {
                    id: 2,
                    name: "Development Key".to_string(),
                    key: "mk_test_9a8b7c6d5e4f3g2h1i0j1k2l3m4n5o6p".to_string(),
                    created: date(2024, 1, 12),
                    last_used: None,
                    visible: false,
                },
            ],
            next_id: 3,
        }
    }
}

impl ApiKeyStore {
    pub fn keys(&self) -> &[ApiKey] {
        &self.keys
    }

    pub fn primary(&self) -> Option<&ApiKey> {
        self.keys.first()
    }

    pub fn create<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&ApiKey, ApiKeyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiKeyError::EmptyName);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.keys.push(ApiKey {
            id,
            name: name.to_string(),
            key: generate_key(rng),
            created: today,
            last_used: None,
            visible: true,
        });
        log::info!("Created API key {}", id);
        self.keys.last().ok_or(ApiKeyError::NotFound(id))
    }

    pub fn delete(&mut self, id: u32) -> Result<(), ApiKeyError> {
        let before = self.keys.len();
        self.keys.retain(|k| k.id != id);
        if self.keys.len() == before {
            return Err(ApiKeyError::NotFound(id));
        }
        Ok(())
    }

    pub fn toggle_visibility(&mut self, id: u32) -> Result<bool, ApiKeyError> {
        let key = self
            .keys
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or(ApiKeyError::NotFound(id))?;
        key.visible = !key.visible;
        Ok(key.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn generated_keys_have_prefix_and_charset() {
        let mut rng = StdRng::seed_from_u64(11);
        let key = generate_key(&mut rng);
        assert!(key.starts_with("mk_live_"));
        assert_eq!(key.len(), 40);
        assert!(key[8..]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn mask_keeps_prefix() {
        let masked = mask_key("mk_live_7f3d8a2b1c4e5f6g7h8i9j0k1l2m3n4o");
        assert!(masked.starts_with("mk_live_"));
        assert_eq!(masked.chars().count(), 32);
        assert!(!masked.contains("7f3d"));
    }

    #[test]
    fn create_trims_name_and_starts_visible() {
        let mut store = ApiKeyStore::default();
        let mut rng = StdRng::seed_from_u64(1);
        let key = store.create("  Staging  ", today(), &mut rng).unwrap().clone();
        assert_eq!(key.name, "Staging");
        assert_eq!(key.id, 3);
        assert!(key.visible);
        assert_eq!(key.display(), key.key);
        assert_eq!(key.last_used_label(), "Never");
        assert_eq!(store.keys().len(), 3);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut store = ApiKeyStore::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            store.create("   ", today(), &mut rng).unwrap_err(),
            ApiKeyError::EmptyName
        );
        assert_eq!(store.keys().len(), 2);
    }

    #[test]
    fn delete_and_toggle() {
        let mut store = ApiKeyStore::default();
        assert_eq!(store.toggle_visibility(1), Ok(true));
        assert_eq!(store.keys()[0].display(), store.keys()[0].key);
        assert_eq!(store.toggle_visibility(1), Ok(false));
        assert!(store.keys()[0].display().ends_with('•'));

        store.delete(2).unwrap();
        assert_eq!(store.keys().len(), 1);
        assert_eq!(store.delete(2), Err(ApiKeyError::NotFound(2)));
        assert_eq!(store.toggle_visibility(9), Err(ApiKeyError::NotFound(9)));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = ApiKeyStore::default();
        let mut rng = StdRng::seed_from_u64(5);
        store.delete(2).unwrap();
        let id = store.create("New", today(), &mut rng).unwrap().id;
        assert_eq!(id, 3);
    }
}
