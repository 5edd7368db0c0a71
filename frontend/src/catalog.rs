//! Endpoint descriptions of the Perfect Pose scanning service, as shown on
//! the two docs pages. The service lives elsewhere; nothing here calls it.

use std::fmt;

use crate::config::SiteVariant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
    /// Prose-only entries such as the introduction.
    Info,
}

impl HttpMethod {
    pub fn label(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Info => "info",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamLocation {
    Body,
    Query,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub key: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Bash,
    Python,
    Json,
}

impl Language {
    pub fn class(self) -> &'static str {
        match self {
            Language::Bash => "language-bash",
            Language::Python => "language-python",
            Language::Json => "language-json",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Example {
    pub label: &'static str,
    pub language: Language,
    /// `{api}` stands for the base URL the documented service runs on.
    pub code: &'static str,
}

impl Example {
    pub fn render(&self, variant: SiteVariant) -> String {
        self.code.trim().replace("{api}", variant.documented_api_url())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponseNote {
    pub content_type: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointDoc {
    pub id: &'static str,
    pub title: &'static str,
    pub method: HttpMethod,
    pub path: Option<&'static str>,
    pub summary: &'static str,
    pub details: Option<&'static str>,
    pub params_in: ParamLocation,
    pub params: &'static [Param],
    pub response: Option<ResponseNote>,
    pub examples: &'static [Example],
}

impl EndpointDoc {
    const fn info(id: &'static str, title: &'static str, summary: &'static str) -> Self {
        Self {
            id,
            title,
            method: HttpMethod::Info,
            path: None,
            summary,
            details: None,
            params_in: ParamLocation::Body,
            params: &[],
            response: None,
            examples: &[],
        }
    }
}

/// FastAPI service documented by the classic site.
pub const CLASSIC_ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        id: "status",
        title: "API Status",
        method: HttpMethod::Get,
        path: Some("/api/status"),
        summary: "Checks the current status of the API and any ongoing scans.",
        details: None,
        params_in: ParamLocation::Body,
        params: &[],
        response: None,
        examples: &[Example {
            label: "Example Response:",
            language: Language::Json,
            code: r#"{
    "message": "Perfect Pose API is running",
    "status": {
        "active": false,
        "step": null,
        "progress": 0
    }
}"#,
        }],
    },
    EndpointDoc {
        id: "run-complete-scan",
        title: "Run Complete Scan",
        method: HttpMethod::Post,
        path: Some("/run_complete_scan"),
        summary: "Initiates a full biometric scan, including face and body analysis. This is the primary endpoint for starting a new analysis.",
        details: None,
        params_in: ParamLocation::Body,
        params: &[
            Param {
                key: "user_id",
                kind: "string",
                required: false,
                default: None,
                description: "An existing user ID. If not provided, a new sequential ID will be generated.",
            },
            Param {
                key: "user_name",
                kind: "string",
                required: false,
                default: None,
                description: "The name of the user.",
            },
        ],
        response: None,
        examples: &[
            Example {
                label: "Example Request:",
                language: Language::Bash,
                code: r#"curl -X POST {api}/run_complete_scan -H "Content-Type: application/json" -d '{
    "user_id": "USER-0001",
    "user_name": "Jane Doe"
}'"#,
            },
            Example {
                label: "Example Success Response:",
                language: Language::Json,
                code: r#"{
    "message": "Complete scan process started in the background.",
    "status": {
        "active": true,
        "step": "main_process",
        "progress": 0,
        "user_id": "USER-0001"
    },
    "user_id": "USER-0001"
}"#,
            },
        ],
    },
    EndpointDoc {
        id: "get-latest-results",
        title: "Get Latest Results",
        method: HttpMethod::Get,
        path: Some("/get_latest_results"),
        summary: "Retrieves the most recently generated scan result from the results directory. Useful for fetching the outcome of a completed scan.",
        details: None,
        params_in: ParamLocation::Body,
        params: &[],
        response: None,
        examples: &[
            Example {
                label: "Example Success Response:",
                language: Language::Json,
                code: r#"{
    "timestamp": "2023-10-27T10:00:00",
    "physiological": { ... },
    "biometric": { ... }
}"#,
            },
            Example {
                label: "Example Error Response (No files found):",
                language: Language::Json,
                code: r#"{
    "detail": "No scan results found."
}"#,
            },
        ],
    },
    EndpointDoc {
        id: "search-scans",
        title: "Search Scans by User ID",
        method: HttpMethod::Get,
        path: Some("/search_scans"),
        summary: "Finds all saved scan records associated with a specific user ID.",
        details: None,
        params_in: ParamLocation::Query,
        params: &[Param {
            key: "user_id",
            kind: "string",
            required: true,
            default: None,
            description: "The ID of the user to search for.",
        }],
        response: None,
        examples: &[
            Example {
                label: "Example Request:",
                language: Language::Bash,
                code: r#"curl "{api}/search_scans?user_id=USER-0001""#,
            },
            Example {
                label: "Example Response:",
                language: Language::Json,
                code: r#"[
    {
        "id": 1,
        "user_id": "USER-0001",
        "file_path": "results/full_scan_20231027_100500.json",
        "scan_type": "full",
        "created_at": "2023-10-27T10:05:00.123456"
    }
]"#,
            },
        ],
    },
    EndpointDoc {
        id: "delete-scan",
        title: "Delete Scan",
        method: HttpMethod::Delete,
        path: Some("/delete_scan"),
        summary: "Deletes a specific scan result file and its corresponding record from the database.",
        details: None,
        params_in: ParamLocation::Query,
        params: &[Param {
            key: "filename",
            kind: "string",
            required: true,
            default: None,
            description: "The name of the scan file to delete (e.g., \"full_scan_20231027_100500.json\").",
        }],
        response: None,
        examples: &[
            Example {
                label: "Example Request:",
                language: Language::Bash,
                code: r#"curl -X DELETE "{api}/delete_scan?filename=full_scan_20231027_100500.json""#,
            },
            Example {
                label: "Example Success Response:",
                language: Language::Json,
                code: r#"{
    "message": "Scan 'full_scan_20231027_100500.json' deleted successfully"
}"#,
            },
        ],
    },
];

/// Flask web interface documented by the redesigned site.
pub const REDESIGN_ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc::info(
        "introduction",
        "Introduction",
        "The official guide to integrating with the Perfect Pose biometric analysis system. Our Flask-based web interface provides both a user-friendly browser interface and REST API endpoints for biometric scanning, running locally with real-time video processing.",
    ),
    EndpointDoc {
        id: "index",
        title: "Web Interface",
        method: HttpMethod::Get,
        path: Some("/"),
        summary: "The main web interface for the Perfect Pose biometric scanner. Returns the HTML interface for browser-based scanning.",
        details: Some("Returns the complete HTML interface with real-time video feed, scan controls, and results display. This is the primary entry point for users accessing the system through a web browser."),
        params_in: ParamLocation::Body,
        params: &[],
        response: None,
        examples: &[],
    },
    EndpointDoc {
        id: "start-scan",
        title: "Start Biometric Scan",
        method: HttpMethod::Post,
        path: Some("/start_scan"),
        summary: "Initiates a biometric scan with specified duration and optional training data collection.",
        details: None,
        params_in: ParamLocation::Body,
        params: &[
            Param {
                key: "duration",
                kind: "integer",
                required: false,
                default: Some("20"),
                description: "Duration of the scan in seconds.",
            },
            Param {
                key: "collect_training_data",
                kind: "boolean",
                required: false,
                default: Some("false"),
                description: "Whether to collect anonymized data for model improvement.",
            },
        ],
        response: None,
        examples: &[
            Example {
                label: "Example Request",
                language: Language::Python,
                code: r#"import requests
response = requests.post("{api}/start_scan", json={
    "duration": 30,
    "collect_training_data": True
})
print(response.json())"#,
            },
            Example {
                label: "Example Response",
                language: Language::Json,
                code: r#"{
  "status": "scan_started",
  "duration": 30
}"#,
            },
        ],
    },
    EndpointDoc {
        id: "scan-status",
        title: "Get Scan Status",
        method: HttpMethod::Get,
        path: Some("/scan_status"),
        summary: "Retrieves the current status of the scanning process, including completion status and results.",
        details: None,
        params_in: ParamLocation::Body,
        params: &[],
        response: None,
        examples: &[Example {
            label: "Example Response",
            language: Language::Json,
            code: r#"{
  "scanning": false,
  "complete": true,
  "results": {
    "timestamp": "2023-10-27T10:00:00",
    "physiological": {
      "heart_rate": 72,
      "blood_pressure": "120/80"
    },
    "biometric": {
      "height": 175,
      "weight": 70
    }
  }
}"#,
        }],
    },
    EndpointDoc {
        id: "video-feed",
        title: "Video Feed Stream",
        method: HttpMethod::Get,
        path: Some("/video_feed"),
        summary: "Provides a real-time video stream from the camera for biometric scanning. Returns a multipart HTTP stream.",
        details: None,
        params_in: ParamLocation::Body,
        params: &[],
        response: Some(ResponseNote {
            content_type: "multipart/x-mixed-replace; boundary=frame",
            description: "Returns a continuous stream of JPEG frames for real-time video display.",
        }),
        examples: &[Example {
            label: "Usage Example",
            language: Language::Python,
            code: r#"# In HTML
<img src="/video_feed" alt="Camera Feed">

# Or with JavaScript fetch for processing
fetch('/video_feed')
  .then(response => {
    // Handle streaming response
  })"#,
        }],
    },
    EndpointDoc {
        id: "submit-feedback",
        title: "Submit Feedback",
        method: HttpMethod::Post,
        path: Some("/submit_feedback"),
        summary: "Submits user feedback data for model improvement and reinforcement learning.",
        details: Some("Accepts feedback data object with user corrections and preferences."),
        params_in: ParamLocation::Body,
        params: &[],
        response: None,
        examples: &[Example {
            label: "Example Request",
            language: Language::Python,
            code: r#"import requests
response = requests.post("{api}/submit_feedback", json={
    "feedback_type": "correction",
    "data": {
        "heart_rate_correction": 75,
        "accuracy_rating": 4
    }
})
print(response.json())"#,
        }],
    },
    EndpointDoc {
        id: "feedback-status",
        title: "Feedback Status",
        method: HttpMethod::Get,
        path: Some("/feedback_status"),
        summary: "Gets the current status of feedback collection sessions.",
        details: None,
        params_in: ParamLocation::Body,
        params: &[],
        response: None,
        examples: &[Example {
            label: "Example Response",
            language: Language::Json,
            code: r#"{
  "has_active_session": true,
  "session_id": "rlhf_session_123456"
}"#,
        }],
    },
];

pub fn endpoints(variant: SiteVariant) -> &'static [EndpointDoc] {
    match variant {
        SiteVariant::Classic => CLASSIC_ENDPOINTS,
        SiteVariant::Redesign => REDESIGN_ENDPOINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogs_cover_documented_paths() {
        let paths = |v| -> Vec<_> { endpoints(v).iter().filter_map(|e| e.path).collect() };
        assert_eq!(
            paths(SiteVariant::Classic),
            ["/api/status", "/run_complete_scan", "/get_latest_results", "/search_scans", "/delete_scan"]
        );
        assert_eq!(
            paths(SiteVariant::Redesign),
            ["/", "/start_scan", "/scan_status", "/video_feed", "/submit_feedback", "/feedback_status"]
        );
    }

    #[test]
    fn anchors_are_unique() {
        for variant in [SiteVariant::Classic, SiteVariant::Redesign] {
            let ids: HashSet<_> = endpoints(variant).iter().map(|e| e.id).collect();
            assert_eq!(ids.len(), endpoints(variant).len());
        }
    }

    #[test]
    fn complete_json_examples_parse() {
        for endpoint in CLASSIC_ENDPOINTS.iter().chain(REDESIGN_ENDPOINTS) {
            for example in endpoint.examples {
                if example.language == Language::Json && !example.code.contains("...") {
                    let parsed: Result<serde_json::Value, _> = serde_json::from_str(example.code);
                    assert!(parsed.is_ok(), "{} / {}", endpoint.id, example.label);
                }
            }
        }
    }

    #[test]
    fn examples_point_at_the_variant_port() {
        let search = &CLASSIC_ENDPOINTS[3].examples[0];
        assert_eq!(
            search.render(SiteVariant::Classic),
            r#"curl "http://localhost:8000/search_scans?user_id=USER-0001""#
        );
        let start = &REDESIGN_ENDPOINTS[2].examples[0];
        assert!(start.render(SiteVariant::Redesign).contains("http://localhost:5000/start_scan"));
    }

    #[test]
    fn required_query_params_are_marked() {
        for endpoint in CLASSIC_ENDPOINTS {
            if endpoint.params_in == ParamLocation::Query {
                assert!(endpoint.params.iter().all(|p| p.required), "{}", endpoint.id);
            }
        }
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
