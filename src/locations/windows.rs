use super::{HostPlatform, PRODUCT_DIR, PlatformLocations, split_search_path};
use std::path::PathBuf;
use tracing::debug;
use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE};

const REGISTRY_KEY: &str = r"SOFTWARE\Lingodict";
const REGISTRY_VALUE: &str = "DictionaryPath";

impl PlatformLocations for HostPlatform {
    fn user_locations(&self) -> Vec<PathBuf> {
        let mut locations = registry_locations(RegKey::predef(HKEY_CURRENT_USER));
        match dirs::data_local_dir() {
            Some(dir) => locations.push(dir.join(PRODUCT_DIR)),
            None => debug!("no local application data directory"),
        }
        locations
    }

    fn system_locations(&self) -> Vec<PathBuf> {
        registry_locations(RegKey::predef(HKEY_LOCAL_MACHINE))
    }
}

fn registry_locations(hive: RegKey) -> Vec<PathBuf> {
    let value = hive
        .open_subkey_with_flags(REGISTRY_KEY, KEY_QUERY_VALUE)
        .and_then(|key| key.get_value::<String, _>(REGISTRY_VALUE));
    match value {
        Ok(raw) => split_search_path(&raw),
        Err(err) => {
            debug!(key = REGISTRY_KEY, %err, "registry dictionary path unavailable");
            Vec::new()
        }
    }
}
