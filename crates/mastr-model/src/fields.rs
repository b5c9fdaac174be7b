//! Source field names as they appear in the registry snapshots.

pub const KEY: &str = "EinheitMastrNummer";
pub const NAME: &str = "NameStromerzeugungseinheit";
pub const STATUS: &str = "EinheitBetriebsstatus";
/// Net rated power in kW.
pub const POWER_KW: &str = "Nettonennleistung";
/// Usable storage capacity in kWh.
pub const ENERGY_KWH: &str = "NutzbareSpeicherkapazitaet";
/// Usable storage capacity in MWh, as written by the snapshot filter step.
pub const ENERGY_MWH: &str = "mwh";
pub const REGION: &str = "Bundesland";
pub const OWNER: &str = "AnlagenbetreiberMastrNummer";
pub const REGISTRATION_DATE: &str = "Registrierungsdatum";
pub const OPERATION_START: &str = "Inbetriebnahmedatum";
pub const PLANNED_OPERATION_START: &str = "GeplantesInbetriebnahmedatum";
pub const LAST_UPDATE: &str = "DatumLetzteAktualisierung";
pub const LATITUDE: &str = "Breitengrad";
pub const LONGITUDE: &str = "Laengengrad";
pub const TECHNOLOGY: &str = "Technologie";
pub const DETAIL_PAGE_ID: &str = "pr_url_id";

/// Source fields consumed into typed record fields. Everything else is kept
/// as a text attribute.
pub const TYPED: [&str; 16] = [
    KEY,
    NAME,
    STATUS,
    POWER_KW,
    ENERGY_KWH,
    ENERGY_MWH,
    REGION,
    OWNER,
    REGISTRATION_DATE,
    OPERATION_START,
    PLANNED_OPERATION_START,
    LAST_UPDATE,
    LATITUDE,
    LONGITUDE,
    TECHNOLOGY,
    DETAIL_PAGE_ID,
];
