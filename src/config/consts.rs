// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://results.eci.gov.in/PcResultGenJune2024/";
pub const INDEX_PAGE: &str = "index.htm";

// Local dataset
pub const DATASET_DIR: &str = "dataset";
pub const OVERVIEW_FILE: &str = "overview-lok_sabha_2024_data.json";
pub const PARTIES_FILE: &str = "detail-partywise-won-seat-data.json";
pub const UNITS_FILE: &str = "constituency-wise-vote-count-data.json";
pub const STATS_FILE: &str = "statistics.json";

// Selectors
pub const OVERVIEW_HEADER_SEL: &str = ".rslt-table table thead tr";
pub const OVERVIEW_BODY_SEL: &str = ".rslt-table table tbody tr";
pub const DETAIL_HEADER_SEL: &str = "table thead tr";
pub const DETAIL_BODY_SEL: &str = "table tbody tr";

// Seed columns: which field of a stage's rows names the next stage's group
pub const PARTY_COLUMN: &str = "Party";
pub const UNIT_COLUMN: &str = "Parliament Constituency";

// The party listing links to per-candidate pages; the vote table lives on the
// constituency page with the same code.
pub const CANDIDATE_LINK_PREFIX: &str = "candidateswise-";
pub const UNIT_LINK_PREFIX: &str = "Constituencywise";
