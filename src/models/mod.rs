mod class_society;
mod exemption;
mod surveyor;
mod vessel;

pub use class_society::{
    default_societies, ClassAnalysis, ClassSocietyData, ListStatus, PscPerformance, Trend,
};
pub use exemption::{default_exemptions, Exemption, NewExemption, ReliefStatus, ReliefType};
pub use surveyor::{NewSurveyor, Surveyor};
pub use vessel::{Inspection, NewInspection, SanctionStatus, Vessel, VesselCandidate};
