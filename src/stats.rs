//! Dashboard summary figures.

use crate::models::Vessel;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagCount {
    pub flag: String,
    pub count: usize,
}

/// Totals over the vessel collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_vessels: usize,
    pub total_gross_tonnage: u64,
    pub sanctioned_vessels: usize,
    /// Vessels per flag, in the order flags first appear.
    pub flags: Vec<FlagCount>,
    pub total_inspections: usize,
    pub detentions: usize,
}

impl RegistryStats {
    pub fn from_vessels(vessels: &[Vessel]) -> Self {
        let mut stats = RegistryStats {
            total_vessels: vessels.len(),
            ..Default::default()
        };

        for vessel in vessels {
            stats.total_gross_tonnage = stats
                .total_gross_tonnage
                .saturating_add(vessel.gross_tonnage);
            if vessel.is_sanctioned() {
                stats.sanctioned_vessels += 1;
            }
            stats.total_inspections += vessel.inspections.len();
            stats.detentions += vessel.detentions();

            let flag = match vessel.flag.trim() {
                "" => "Unknown",
                flag => flag,
            };
            match stats.flags.iter_mut().find(|f| f.flag == flag) {
                Some(entry) => entry.count += 1,
                None => stats.flags.push(FlagCount {
                    flag: flag.to_string(),
                    count: 1,
                }),
            }
        }

        stats
    }
}
