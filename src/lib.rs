//! # vietaddr
//!
//! Vietnamese address parsing: extracts the province, district and ward
//! from free-form, typo-laden address strings by matching against a fixed
//! gazetteer of canonical names.
//!
//! Tolerance to misspellings comes from the build side, not the lookup
//! side: every canonical name is inserted into a prefix tree together
//! with all of its single-edit spelling variants (deletion, substitution,
//! insertion), so a typo of those classes is an exact trie hit. A
//! right-to-left sliding-window pass then segments the address and
//! assigns each segment's words to the correct component.
//!
//! ## Features
//!
//! - **Typo tolerance**: one-edit misspellings resolve to the canonical
//!   name ("hà nộc" → "Hà Nội")
//! - **Canonical output**: original capitalization and diacritics are
//!   returned regardless of the input spelling
//! - **No-match is not an error**: unresolved components come back empty
//! - **Thread safe**: a built resolver is immutable and freely shareable
//!
//! ## Quick Start
//!
//! ```rust
//! use vietaddr::{AddressResolver, CanonicalEntry};
//!
//! // In production the entries come from the gazetteer files; see
//! // `GazetteerStore` and `VietAddr` for the file-backed path.
//! let resolver = AddressResolver::from_entries(
//!     &[CanonicalEntry::new("Hồ Chí Minh")],
//!     &[CanonicalEntry::new("7")],
//!     &[CanonicalEntry::new("Phú Mỹ")],
//! )?;
//!
//! let result = resolver.process("123 Đường ABC, Phường Phú Mỹ, Quận 7, TP. Hồ Chí Minh");
//! assert_eq!(result.province, "Hồ Chí Minh");
//! assert_eq!(result.district, "7");
//! assert_eq!(result.ward, "Phú Mỹ");
//! # Ok::<(), vietaddr::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod data;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod profiling;
pub mod resolver;
pub mod trie;
pub mod types;
pub mod variants;

// Re-export main API
pub use error::{Error, Result};
pub use matcher::{ComponentMatcher, SegmentMatch};
pub use resolver::{AddressResolver, AddressResult};
pub use trie::Trie;
pub use types::{CanonicalEntry, Component};

use data::{Gazetteer, GazetteerConfig, GazetteerStore};

/// Main entry point for gazetteer-backed address resolution.
///
/// Owns a built [`AddressResolver`] over the three component tries.
/// Construction is the only phase that touches the filesystem or mutates
/// anything; afterwards the value is immutable and shareable.
///
/// # Examples
///
/// ```rust,no_run
/// use vietaddr::VietAddr;
///
/// // Loads province.txt, district.txt and ward.txt from the default
/// // data directory and builds the tries.
/// let vietaddr = VietAddr::new()?;
///
/// let result = vietaddr.resolve("Phường Phú Mỹ, Quận 7, TP. Hồ Chí Minh");
/// println!("province: {}", result.province);
/// println!("district: {}", result.district);
/// println!("ward: {}", result.ward);
/// # Ok::<(), vietaddr::Error>(())
/// ```
#[derive(Debug)]
pub struct VietAddr {
    config: VietAddrConfig,
    resolver: AddressResolver,
}

impl VietAddr {
    /// Initialize with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the gazetteer files are missing, empty or
    /// corrupt, or if trie construction fails. The resolver is never
    /// usable over a partially-built trie.
    pub fn new() -> Result<Self> {
        Self::with_config(VietAddrConfig::default())
    }

    /// Initialize with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vietaddr::{VietAddr, VietAddrConfig};
    ///
    /// let config = VietAddrConfig::builder()
    ///     .data_dir("data")
    ///     .verify_gazetteer(true)
    ///     .build();
    ///
    /// let vietaddr = VietAddr::with_config(config)?;
    /// # Ok::<(), vietaddr::Error>(())
    /// ```
    pub fn with_config(config: VietAddrConfig) -> Result<Self> {
        let store = GazetteerStore::with_config(config.data_config.clone());
        if config.verify_gazetteer {
            store.verify()?;
        }
        let gazetteer = store.load_all()?;
        let resolver = AddressResolver::from_entries(
            &gazetteer.provinces,
            &gazetteer.districts,
            &gazetteer.wards,
        )?;

        Ok(Self { config, resolver })
    }

    /// Build from an in-memory gazetteer, without touching the
    /// filesystem.
    pub fn from_gazetteer(gazetteer: &Gazetteer) -> Result<Self> {
        let resolver = AddressResolver::from_entries(
            &gazetteer.provinces,
            &gazetteer.districts,
            &gazetteer.wards,
        )?;

        Ok(Self {
            config: VietAddrConfig::default(),
            resolver,
        })
    }

    /// Resolve one raw address into its administrative components.
    pub fn resolve(&self, address: &str) -> AddressResult {
        self.resolver.process(address)
    }

    /// The inner resolver, for batch use.
    pub fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    /// The configuration used by this instance.
    pub fn config(&self) -> &VietAddrConfig {
        &self.config
    }
}

/// Configuration for [`VietAddr`] initialization.
#[derive(Debug, Clone)]
pub struct VietAddrConfig {
    /// Whether to verify gazetteer files before loading
    pub verify_gazetteer: bool,

    /// Gazetteer data configuration
    pub data_config: GazetteerConfig,
}

impl Default for VietAddrConfig {
    fn default() -> Self {
        Self {
            verify_gazetteer: true,
            data_config: GazetteerConfig::default(),
        }
    }
}

impl VietAddrConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vietaddr::VietAddrConfig;
    ///
    /// let config = VietAddrConfig::builder()
    ///     .verify_gazetteer(false)
    ///     .build();
    /// assert!(!config.verify_gazetteer);
    /// ```
    pub fn builder() -> VietAddrConfigBuilder {
        VietAddrConfigBuilder::new()
    }
}

/// Builder for [`VietAddrConfig`].
#[derive(Debug, Clone)]
pub struct VietAddrConfigBuilder {
    verify_gazetteer: bool,
    data_config: GazetteerConfig,
}

impl VietAddrConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            verify_gazetteer: true,
            data_config: GazetteerConfig::default(),
        }
    }

    /// Set whether to verify gazetteer files before loading.
    pub fn verify_gazetteer(mut self, enabled: bool) -> Self {
        self.verify_gazetteer = enabled;
        self
    }

    /// Set the gazetteer data configuration.
    pub fn data_config(mut self, config: GazetteerConfig) -> Self {
        self.data_config = config;
        self
    }

    /// Set a custom data directory.
    pub fn data_dir<P: Into<std::path::PathBuf>>(mut self, dir: P) -> Self {
        self.data_config.data_dir = dir.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> VietAddrConfig {
        VietAddrConfig {
            verify_gazetteer: self.verify_gazetteer,
            data_config: self.data_config,
        }
    }
}

impl Default for VietAddrConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_gazetteer() -> Gazetteer {
        Gazetteer {
            provinces: vec![CanonicalEntry::new("Hà Nội")],
            districts: vec![CanonicalEntry::new("Hà Đông")],
            wards: vec![CanonicalEntry::new("Phú Mỹ")],
        }
    }

    #[test]
    fn test_from_gazetteer() {
        let vietaddr = VietAddr::from_gazetteer(&fixture_gazetteer()).unwrap();
        let result = vietaddr.resolve("Phú Mỹ, Hà Đông, Hà Nội");

        assert_eq!(result.province, "Hà Nội");
        assert_eq!(result.district, "Hà Đông");
        assert_eq!(result.ward, "Phú Mỹ");
    }

    #[test]
    fn test_with_config_from_files() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        for (file, content) in [
            ("province.txt", "Hà Nội\n"),
            ("district.txt", "Hà Đông\n"),
            ("ward.txt", "Phú Mỹ\n"),
        ] {
            let mut f = std::fs::File::create(dir.path().join(file)).unwrap();
            f.write_all(content.as_bytes()).unwrap();
        }

        let config = VietAddrConfig::builder().data_dir(dir.path()).build();
        let vietaddr = VietAddr::with_config(config).unwrap();

        let result = vietaddr.resolve("Hà Nội");
        assert_eq!(result.province, "Hà Nội");
    }

    #[test]
    fn test_with_config_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let config = VietAddrConfig::builder().data_dir(dir.path()).build();
        assert!(VietAddr::with_config(config).is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = VietAddrConfig::builder()
            .verify_gazetteer(false)
            .data_dir("/tmp/gazetteer")
            .build();

        assert!(!config.verify_gazetteer);
        assert_eq!(
            config.data_config.data_dir,
            std::path::PathBuf::from("/tmp/gazetteer")
        );
    }
}
