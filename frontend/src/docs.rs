use yew::prelude::*;

use crate::catalog::{EndpointDoc, HttpMethod, Language, ParamLocation};
use crate::config::SiteVariant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    pub href: String,
    pub method: HttpMethod,
    pub title: &'static str,
}

/// One entry per endpoint, in catalog order.
pub fn sidebar_entries(endpoints: &[EndpointDoc]) -> Vec<SidebarEntry> {
    endpoints
        .iter()
        .map(|endpoint| SidebarEntry {
            href: format!("#{}", endpoint.id),
            method: endpoint.method,
            title: endpoint.title,
        })
        .collect()
}

fn badge_class(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "pp-badge pp-badge--get",
        HttpMethod::Post => "pp-badge pp-badge--post",
        HttpMethod::Delete => "pp-badge pp-badge--delete",
        HttpMethod::Info => "pp-badge pp-badge--info",
    }
}

#[derive(Properties, PartialEq)]
pub struct MethodBadgeProps {
    pub method: HttpMethod,
}

#[function_component(MethodBadge)]
pub fn method_badge(props: &MethodBadgeProps) -> Html {
    html! { <span class={badge_class(props.method)}>{ props.method.label() }</span> }
}

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: AttrValue,
    pub language: Language,
}

#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    html! {
        <div class="pp-code-block">
            <pre><code class={props.language.class()}>{ props.code.clone() }</code></pre>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub endpoints: &'static [EndpointDoc],
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="pp-docs-sidebar">
            <h3>{"API Reference"}</h3>
            { for sidebar_entries(props.endpoints).into_iter().map(|entry| html! {
                <a key={entry.href.clone()} href={entry.href.clone()} class="pp-sidebar-entry">
                    <MethodBadge method={entry.method} />
                    <span>{ entry.title }</span>
                </a>
            }) }
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct EndpointSectionProps {
    pub endpoint: EndpointDoc,
    pub variant: SiteVariant,
}

/// Full write-up of one endpoint. The classic site lays these out as cards
/// with parameter tables, the redesign as flowing sections.
#[function_component(EndpointSection)]
pub fn endpoint_section(props: &EndpointSectionProps) -> Html {
    let endpoint = &props.endpoint;
    let variant = props.variant;

    let signature = match endpoint.path {
        Some(path) => html! {
            <div class="pp-endpoint-signature">
                <MethodBadge method={endpoint.method} />
                <span class="pp-endpoint-path">{ path }</span>
            </div>
        },
        None => html! {},
    };

    let params_heading = match (variant, endpoint.params_in) {
        (SiteVariant::Classic, ParamLocation::Body) => "Request Body (JSON):",
        (SiteVariant::Classic, ParamLocation::Query) => "Query Parameters:",
        (SiteVariant::Redesign, ParamLocation::Body) => "Request Body",
        (SiteVariant::Redesign, ParamLocation::Query) => "Query Parameters",
    };

    let params = if endpoint.params.is_empty() {
        match (variant, endpoint.details) {
            (SiteVariant::Redesign, Some(details)) if endpoint.method == HttpMethod::Post => html! {
                <>
                    <h4>{ params_heading }</h4>
                    <div class="pp-param-list"><p class="pp-param-desc">{ details }</p></div>
                </>
            },
            _ => html! {},
        }
    } else if variant == SiteVariant::Classic {
        html! {
            <>
                <p class="pp-label">{ params_heading }</p>
                <div class="pp-table-wrap">
                    <table class="pp-param-table">
                        <thead>
                            <tr><th>{"Key"}</th><th>{"Type"}</th><th>{"Description"}</th></tr>
                        </thead>
                        <tbody>
                            { for endpoint.params.iter().map(|param| html! {
                                <tr key={param.key}>
                                    <td class="pp-mono">{ param.key }</td>
                                    <td class="pp-mono">{ param.kind }</td>
                                    <td>
                                        {
                                            if param.required {
                                                html! { <><strong>{"Required."}</strong>{" "}</> }
                                            } else {
                                                html! { {"Optional. "} }
                                            }
                                        }
                                        { param.description }
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </>
        }
    } else {
        html! {
            <>
                <h4>{ params_heading }</h4>
                <div class="pp-param-list">
                    { for endpoint.params.iter().map(|param| {
                        let requirement = match (param.required, param.default) {
                            (true, _) => "Required".to_string(),
                            (false, Some(default)) => format!("Optional (default: {})", default),
                            (false, None) => "Optional".to_string(),
                        };
                        html! {
                            <div key={param.key}>
                                <p class="pp-mono">
                                    <span class="pp-param-key">{ param.key }</span>{ format!(": {} ", param.kind) }
                                    <span class="pp-param-req">{ requirement }</span>
                                </p>
                                <p class="pp-param-desc">{ param.description }</p>
                            </div>
                        }
                    }) }
                </div>
            </>
        }
    };

    let details = match (endpoint.details, endpoint.method) {
        (Some(details), HttpMethod::Get) => html! {
            <>
                <h4>{"Description"}</h4>
                <p>{ details }</p>
            </>
        },
        _ => html! {},
    };

    let response = match endpoint.response {
        Some(note) => html! {
            <>
                <h4>{"Response"}</h4>
                <div class="pp-param-list">
                    <p class="pp-mono">{"Content-Type: "}<span class="pp-param-key">{ note.content_type }</span></p>
                    <p class="pp-param-desc">{ note.description }</p>
                </div>
            </>
        },
        None => html! {},
    };

    let examples = endpoint.examples.iter().map(|example| {
        let heading = match variant {
            SiteVariant::Classic => html! { <p class="pp-label">{ example.label }</p> },
            SiteVariant::Redesign => html! { <h4>{ example.label }</h4> },
        };
        html! {
            <>
                { heading }
                <CodeBlock code={example.render(variant)} language={example.language} />
            </>
        }
    });

    let class = match variant {
        SiteVariant::Classic => "pp-endpoint pp-endpoint--card",
        SiteVariant::Redesign => "pp-endpoint pp-endpoint--flow",
    };

    html! {
        <section id={endpoint.id} class={class}>
            <h2>{ endpoint.title }</h2>
            <p>{ endpoint.summary }</p>
            { signature }
            { details }
            { params }
            { response }
            { for examples }
        </section>
    }
}

/// Styles shared by both docs pages.
pub const DOCS_CSS: &str = r#"
.pp-badge {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.875rem;
    font-weight: 600;
    padding: 0.25rem 0.625rem;
    border-radius: 0.375rem;
    border: 1px solid;
}
.pp-badge--get { background: rgba(22, 163, 74, 0.2); color: #86efac; border-color: rgba(34, 197, 94, 0.3); }
.pp-badge--post { background: rgba(37, 99, 235, 0.2); color: #93c5fd; border-color: rgba(59, 130, 246, 0.3); }
.pp-badge--delete { background: rgba(220, 38, 38, 0.2); color: #fca5a5; border-color: rgba(239, 68, 68, 0.3); }
.pp-badge--info { background: rgba(75, 85, 99, 0.2); color: #d1d5db; border-color: rgba(107, 114, 128, 0.3); }
.pp-code-block {
    background: rgba(17, 24, 39, 0.7);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.5rem;
    margin-top: 1rem;
    padding: 1rem;
    overflow-x: auto;
}
.pp-code-block pre { margin: 0; }
.pp-code-block code {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    white-space: pre-wrap;
    word-break: break-word;
    color: #e5e7eb;
}
.pp-docs-sidebar {
    position: sticky;
    top: 6rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.pp-docs-sidebar h3 { color: #fff; font-size: 1.125rem; margin-bottom: 1rem; }
.pp-sidebar-entry {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.5rem;
    border-radius: 0.5rem;
    color: #d1d5db;
    text-decoration: none;
    transition: background 0.2s;
}
.pp-sidebar-entry:hover { background: rgba(255, 255, 255, 0.05); }
.pp-endpoint h2 { font-size: 1.875rem; font-weight: 700; color: #fff; }
.pp-endpoint h4 { font-size: 1.25rem; font-weight: 600; color: #fff; padding-top: 1rem; }
.pp-endpoint--card {
    margin-bottom: 3rem;
    padding: 1.5rem;
    background: #111827;
    border: 1px solid #374151;
    border-radius: 0.5rem;
}
.pp-endpoint--card h2 {
    border-bottom: 2px solid #374151;
    padding-bottom: 0.5rem;
    margin-bottom: 1rem;
}
.pp-endpoint--flow { padding-top: 5rem; scroll-margin-top: 6rem; }
.pp-endpoint-signature {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 0.5rem 0;
}
.pp-endpoint--card .pp-endpoint-signature {
    display: inline-flex;
    background: #1f2937;
    border: 1px solid #4b5563;
    border-radius: 0.375rem;
    padding: 0.5rem 1rem;
    margin-bottom: 1rem;
}
.pp-endpoint-path, .pp-mono { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; color: #fff; }
.pp-label { font-weight: 600; margin: 1rem 0 0.5rem; }
.pp-table-wrap { overflow-x: auto; }
.pp-param-table { width: 100%; border-collapse: collapse; margin: 1rem 0; }
.pp-param-table th { background: #1f2937; text-align: left; }
.pp-param-table th, .pp-param-table td { border: 1px solid #374151; padding: 0.75rem; }
.pp-param-list {
    font-size: 0.875rem;
    padding: 1rem;
    border-radius: 0.5rem;
    background: rgba(17, 24, 39, 0.7);
    border: 1px solid rgba(255, 255, 255, 0.1);
}
.pp-param-key { color: #60a5fa; }
.pp-param-req { color: #6b7280; font-style: italic; margin-left: 0.5rem; }
.pp-param-desc { color: #9ca3af; padding-left: 1rem; margin-top: 0.25rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CLASSIC_ENDPOINTS, REDESIGN_ENDPOINTS};

    #[test]
    fn sidebar_has_one_entry_per_endpoint_in_order() {
        let entries = sidebar_entries(REDESIGN_ENDPOINTS);
        assert_eq!(entries.len(), REDESIGN_ENDPOINTS.len());
        for (entry, endpoint) in entries.iter().zip(REDESIGN_ENDPOINTS) {
            assert_eq!(entry.title, endpoint.title);
            assert_eq!(entry.href, format!("#{}", endpoint.id));
            assert_eq!(entry.method, endpoint.method);
        }
        assert_eq!(entries[0].method, HttpMethod::Info);
    }

    #[test]
    fn sidebar_preserves_arbitrary_order() {
        let reversed: Vec<EndpointDoc> = CLASSIC_ENDPOINTS.iter().rev().copied().collect();
        let titles: Vec<_> = sidebar_entries(&reversed).into_iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            ["Delete Scan", "Search Scans by User ID", "Get Latest Results", "Run Complete Scan", "API Status"]
        );
    }

    #[test]
    fn empty_catalog_gives_empty_sidebar() {
        assert!(sidebar_entries(&[]).is_empty());
    }
}
