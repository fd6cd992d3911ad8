//! Region name resolution.
//!
//! Custom locale codes carry a region subtag (`du-my` → `my`) that the
//! operating environment usually cannot name. Resolution asks an
//! authoritative region source first and degrades to the raw code when the
//! source does not recognize it, so a triple always comes back.

/// English, native and display names of a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionNames {
    /// English-only name (e.g. "Germany")
    pub english_name: String,
    /// Native-script name (e.g. "Deutschland")
    pub native_name: String,
    /// UI-friendly name
    pub display_name: String,
}

impl RegionNames {
    /// Triple reported by an authoritative region source.
    pub fn new(english_name: &str, native_name: &str, display_name: &str) -> Self {
        Self {
            english_name: english_name.to_string(),
            native_name: native_name.to_string(),
            display_name: display_name.to_string(),
        }
    }

    /// Degraded triple: the raw region code fills all three names.
    pub fn from_code(code: &str) -> Self {
        Self::new(code, code, code)
    }
}

/// Capability onto authoritative region information (ISO 3166-style lookup).
pub trait RegionInfoSource: Send + Sync {
    /// Names for `code`, or `None` when the code is not a recognized region.
    fn lookup(&self, code: &str) -> Option<RegionNames>;
}

/// Resolve the English, native and display names of `region_code`.
///
/// Pure and side-effect free; safe to call repeatedly and concurrently.
///
/// # Arguments
/// * `source` - The authoritative region source supplied by the host
/// * `region_code` - The region subtag to resolve (e.g. "my", "DE")
///
/// # Returns
/// The source's exact triple when the code is recognized; otherwise a
/// degraded triple where all three names are `region_code` verbatim.
pub fn resolve_region_names(source: &dyn RegionInfoSource, region_code: &str) -> RegionNames {
    match source.lookup(region_code) {
        Some(names) => names,
        None => RegionNames::from_code(region_code),
    }
}

/// Region rows: (code, english, native, display).
const ISO_REGIONS: [(&str, &str, &str, &str); 24] = [
    ("AE", "United Arab Emirates", "الإمارات العربية المتحدة", "United Arab Emirates"),
    ("AT", "Austria", "Österreich", "Austria"),
    ("BE", "Belgium", "België", "Belgium"),
    ("BR", "Brazil", "Brasil", "Brazil"),
    ("CA", "Canada", "Canada", "Canada"),
    ("CH", "Switzerland", "Schweiz", "Switzerland"),
    ("CN", "China", "中国", "China"),
    ("DE", "Germany", "Deutschland", "Germany"),
    ("DK", "Denmark", "Danmark", "Denmark"),
    ("ES", "Spain", "España", "Spain"),
    ("FR", "France", "France", "France"),
    ("GB", "United Kingdom", "United Kingdom", "United Kingdom"),
    ("ID", "Indonesia", "Indonesia", "Indonesia"),
    ("IN", "India", "भारत", "India"),
    ("IT", "Italy", "Italia", "Italy"),
    ("JP", "Japan", "日本", "Japan"),
    ("MX", "Mexico", "México", "Mexico"),
    ("MY", "Malaysia", "Malaysia", "Malaysia"),
    ("NL", "Netherlands", "Nederland", "Netherlands"),
    ("NO", "Norway", "Norge", "Norway"),
    ("PT", "Portugal", "Portugal", "Portugal"),
    ("SE", "Sweden", "Sverige", "Sweden"),
    ("SG", "Singapore", "Singapore", "Singapore"),
    ("US", "United States", "United States", "United States"),
];

/// Region source backed by a static ISO 3166 table.
///
/// Lookup is case-insensitive, the way region lookups behave in the
/// environments this mirrors.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoRegionSource;

impl IsoRegionSource {
    /// Create the static region source.
    pub fn new() -> Self {
        Self
    }
}

impl RegionInfoSource for IsoRegionSource {
    fn lookup(&self, code: &str) -> Option<RegionNames> {
        let code = code.to_ascii_uppercase();
        ISO_REGIONS
            .iter()
            .find(|(region, ..)| *region == code)
            .map(|(_, english, native, display)| RegionNames::new(english, native, display))
    }
}
