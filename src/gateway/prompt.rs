//! Prompt text for the two gateway requests.

/// Instruction for a vessel particulars search.
pub fn vessel_search_prompt(name: &str, imo: &str) -> String {
    format!(
        r#"Search the web for the merchant vessel "{name}" with IMO number "{imo}".

Collect:
1. Particulars: gross tonnage, year built, vessel type, flag state.
2. Dimensions and build: length overall (m), beam (m), summer draft (m), shipyard.
3. Current location from the latest AIS position reports.
4. The classification society that classes the vessel, and the URL of the vessel's
   entry in that society's public register (or the register search page if no direct
   link is available).
5. Whether this vessel or IMO number appears on OFAC, UN or EU sanction lists.
6. The date of the last special or annual survey and the status of its major
   certificates (Valid, Suspended, Withdrawn or Unknown).

Reply with a single JSON object and nothing else, using exactly this shape:
{{
  "name": "{name}",
  "imo": "{imo}",
  "grossTonnage": 0,
  "yearBuilt": "YYYY",
  "type": "Vessel type",
  "flag": "Flag state",
  "lengthOverall": "e.g. 299.9 m",
  "beam": "e.g. 48.2 m",
  "draft": "e.g. 14.5 m",
  "builder": "Shipyard name",
  "location": "Current location summary",
  "classSociety": "Class society name",
  "classSocietyUrl": "URL of the register entry",
  "sanctionInfo": "Summary of sanction findings or 'None found'",
  "isSanctioned": false,
  "lastSurveyDate": "Date or 'Unknown'",
  "certificateStatus": "Status summary or 'Unknown'",
  "description": "Two sentence summary of the vessel."
}}"#
    )
}

/// Instruction for a classification-society PSC performance analysis.
pub fn class_analysis_prompt(name: &str) -> String {
    format!(
        r#"Find the latest Port State Control performance of the classification society "{name}".

Use the most recent official publications:
1. Paris MoU annual report, White, Grey and Black list of recognized organizations:
   is "{name}" on the White, Grey or Black list?
2. Tokyo MoU annual report, performance of recognized organizations:
   is "{name}" on the White, Grey or Black list?
3. US Coast Guard annual port state control report, class society performance table:
   is "{name}" Targeted, Non-Targeted or QUALSHIP 21?

If the current year is not yet published, use the latest available year.

Reply with a single JSON object and nothing else, using exactly this shape:
{{
  "name": "{name}",
  "pscData": [
    {{ "mou": "Paris MoU", "listStatus": "e.g. White List", "performanceLevel": "High" }},
    {{ "mou": "Tokyo MoU", "listStatus": "e.g. White List", "performanceLevel": "High" }},
    {{ "mou": "USCG", "listStatus": "e.g. Non-Targeted", "performanceLevel": "High" }}
  ],
  "trend": "Up, Down or Steady",
  "trendReason": "Brief explanation of the performance across the three regimes."
}}"#
    )
}
