use yew::prelude::*;

/// Stroke icons in the Feather style, stored as a single path each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Heart,
    Maximize,
    Watch,
    BarChart,
    Lock,
    Cpu,
    Zap,
    Terminal,
}

impl IconKind {
    fn path(self) -> &'static str {
        match self {
            IconKind::Heart => "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
            IconKind::Maximize => "M8 3H5a2 2 0 0 0-2 2v3m18 0V5a2 2 0 0 0-2-2h-3m0 18h3a2 2 0 0 0 2-2v-3M3 16v3a2 2 0 0 0 2 2h3",
            IconKind::Watch => "M12 5a7 7 0 1 0 0 14 7 7 0 0 0 0-14zM12 9v3l1.5 1.5M16.51 17.35l-.35 3.83a2 2 0 0 1-2 1.82H9.83a2 2 0 0 1-2-1.82l-.35-3.83m.01-10.7l.35-3.83A2 2 0 0 1 9.83 1h4.35a2 2 0 0 1 2 1.82l.35 3.83",
            IconKind::BarChart => "M18 20V10M12 20V4M6 20v-6",
            IconKind::Lock => "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2zM7 11V7a5 5 0 0 1 10 0v4",
            IconKind::Cpu => "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM9 9h6v6H9zM9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3",
            IconKind::Zap => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
            IconKind::Terminal => "M4 17l6-6-6-6M12 19h8",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            viewBox="0 0 24 24"
            width="100%"
            height="100%"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={props.kind.path()}></path>
        </svg>
    }
}
