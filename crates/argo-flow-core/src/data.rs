//! Canned oceanographic sample data.
//!
//! Everything the dashboard displays comes from these fixed arrays; there
//! is no live data source and no computation over them beyond rendering.

/// One sampled point of a monthly depth profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub month: &'static str,
    pub value: f32,
    pub depth_m: u32,
}

/// Temperature profile (°C) by month and depth.
pub const TEMPERATURE_PROFILE: [ProfilePoint; 6] = [
    ProfilePoint { month: "Jan", value: 28.5, depth_m: 0 },
    ProfilePoint { month: "Feb", value: 26.2, depth_m: 50 },
    ProfilePoint { month: "Mar", value: 22.8, depth_m: 100 },
    ProfilePoint { month: "Apr", value: 18.5, depth_m: 200 },
    ProfilePoint { month: "May", value: 15.2, depth_m: 300 },
    ProfilePoint { month: "Jun", value: 12.8, depth_m: 500 },
];

/// Salinity profile (PSU) by month and depth.
pub const SALINITY_PROFILE: [ProfilePoint; 6] = [
    ProfilePoint { month: "Jan", value: 35.2, depth_m: 0 },
    ProfilePoint { month: "Feb", value: 35.8, depth_m: 50 },
    ProfilePoint { month: "Mar", value: 36.1, depth_m: 100 },
    ProfilePoint { month: "Apr", value: 36.5, depth_m: 200 },
    ProfilePoint { month: "May", value: 36.2, depth_m: 300 },
    ProfilePoint { month: "Jun", value: 35.9, depth_m: 500 },
];

/// Operational status of a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStatus {
    Active,
    Inactive,
    Maintenance,
}

impl FloatStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FloatStatus::Active => "Active",
            FloatStatus::Inactive => "Inactive",
            FloatStatus::Maintenance => "Maintenance",
        }
    }
}

/// A profiling float with its last reported position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArgoFloat {
    pub id: u32,
    pub lat: f32,
    pub lng: f32,
    pub status: FloatStatus,
}

/// The fixed float network along the Indian coast.
pub const FLOATS: [ArgoFloat; 7] = [
    ArgoFloat { id: 1, lat: 19.0, lng: 72.8, status: FloatStatus::Active }, // Mumbai coast
    ArgoFloat { id: 2, lat: 15.3, lng: 73.8, status: FloatStatus::Active }, // Goa coast
    ArgoFloat { id: 3, lat: 11.0, lng: 76.0, status: FloatStatus::Maintenance }, // Kerala coast
    ArgoFloat { id: 4, lat: 13.1, lng: 80.3, status: FloatStatus::Active }, // Chennai coast
    ArgoFloat { id: 5, lat: 17.7, lng: 83.3, status: FloatStatus::Inactive }, // Visakhapatnam coast
    ArgoFloat { id: 6, lat: 22.3, lng: 88.3, status: FloatStatus::Active }, // Kolkata coast
    ArgoFloat { id: 7, lat: 8.5, lng: 76.9, status: FloatStatus::Active }, // Trivandrum coast
];

/// One bullet of the key-findings summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub title: &'static str,
    pub detail: &'static str,
}

/// The canned key-findings bullets shown under ARGO-related replies.
pub const KEY_FINDINGS: [Finding; 4] = [
    Finding {
        title: "Monsoon Impact",
        detail: "Mixed layer depth increased from 25m to 65m",
    },
    Finding {
        title: "Temperature Anomaly",
        detail: "Surface temperatures 0.8\u{b0}C cooler than climatology",
    },
    Finding {
        title: "Salinity Patterns",
        detail: "Fresh water intrusion in northern regions",
    },
    Finding {
        title: "Float Network",
        detail: "5 active floats providing real-time data",
    },
];

/// Insight bullets shown in the node-analysis detail panel. Static and
/// query-independent; the query text is only echoed back.
pub const NODE_ANALYSIS_INSIGHTS: [&str; 4] = [
    "This node represents a critical data point in the ARGO float network analysis.",
    "The data shows significant oceanographic patterns relevant to climate monitoring.",
    "Temperature and salinity measurements indicate seasonal variations in this region.",
    "This information contributes to our understanding of global ocean circulation patterns.",
];

/// Recommendation line closing the node-analysis panel.
pub const NODE_ANALYSIS_RECOMMENDATION: &str =
    "Consider correlating this data with nearby float measurements for a more comprehensive analysis.";

/// The fixed assistant reply appended after the simulated-response timer.
pub const SIMULATED_AI_RESPONSE: &str =
    "Based on ARGO float data analysis, I can provide comprehensive temperature and salinity \
     profiles. The data shows significant seasonal variations in the Arabian Sea during monsoon \
     periods.";

/// User prompt in the empty-state demonstration graph.
pub const DEMO_USER_PROMPT: &str = "Tell me about ARGO floats in the Indian Ocean";

/// Assistant reply in the empty-state demonstration graph.
pub const DEMO_AI_RESPONSE: &str =
    "ARGO floats are autonomous oceanographic instruments that collect temperature and salinity \
     data. In the Indian Ocean, they provide crucial insights into monsoon patterns and ocean \
     circulation.";
