use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Language;
use crate::components::footer::Footer;
use crate::components::icon::{Icon, IconKind};
use crate::config::SiteVariant;
use crate::docs::CodeBlock;
use crate::nav::{use_landing_scroll, Nav};
use crate::reveal::{use_reveal, RevealMotion, RevealOptions};
use crate::signup::SignUpForm;
use crate::Route;

const VARIANT: SiteVariant = SiteVariant::Redesign;

struct BentoFeature {
    icon: IconKind,
    tint: &'static str,
    title: &'static str,
    description: &'static str,
    wide: bool,
}

const FEATURES: &[BentoFeature] = &[
    BentoFeature {
        icon: IconKind::Heart,
        tint: "pp-tint-blue",
        title: "Contactless Vital Signs",
        description: "Measure heart rate, skin temperature, and blood pressure with just your camera.",
        wide: true,
    },
    BentoFeature {
        icon: IconKind::Maximize,
        tint: "pp-tint-green",
        title: "Accurate Biometric Data",
        description: "Get precise estimations of your height, weight, and BMI.",
        wide: false,
    },
    BentoFeature {
        icon: IconKind::Watch,
        tint: "pp-tint-purple",
        title: "Real-time Exercise Analysis",
        description: "Receive feedback on your form to maximize effectiveness and prevent injury.",
        wide: false,
    },
    BentoFeature {
        icon: IconKind::BarChart,
        tint: "pp-tint-red",
        title: "Personalized Insights",
        description: "Track your progress over time with detailed reports and historical data.",
        wide: false,
    },
    BentoFeature {
        icon: IconKind::Lock,
        tint: "pp-tint-yellow",
        title: "Secure and Private",
        description: "Your data is processed securely, and your privacy is our top priority.",
        wide: false,
    },
    BentoFeature {
        icon: IconKind::Cpu,
        tint: "pp-tint-indigo",
        title: "State-of-the-Art AI",
        description: "Built with PyTorch, YOLOv8, MediaPipe, and custom models for best-in-class analysis.",
        wide: true,
    },
];

const SCAN_EXAMPLE: &str = r#"import requests

# The API runs on your local machine
API_URL = "{api}"

def run_perfect_pose_scan(user_id="user-123"):
    """
    Initiates a scan and retrieves the results.
    """
    start_endpoint = f"{API_URL}/run_complete_scan"

    try:
        response = requests.post(start_endpoint, json={"user_id": user_id})
        response.raise_for_status()
        print("Scan complete. Results:")
        print(response.json())
    except requests.exceptions.RequestException as e:
        print(f"API request failed: {e}")

# Example usage:
run_perfect_pose_scan()"#;

struct SideCard {
    title: &'static str,
    tint: &'static str,
    body: &'static str,
}

const SIDE_CARDS: &[SideCard] = &[
    SideCard {
        title: "Local & Private",
        tint: "pp-tint-blue",
        body: "Your data never leaves your device. Perfect Pose runs a local server for maximum privacy and speed.",
    },
    SideCard {
        title: "Simple Integration",
        tint: "pp-tint-green",
        body: "A single API call is all it takes. No complex auth, no rate limits. Just results.",
    },
];

#[function_component(RedesignHome)]
pub fn redesign_home() -> Html {
    use_landing_scroll();

    html! {
        <div class="pp-page pp-redesign">
            <Nav variant={VARIANT} />
            <HeroSection />
            <BentoFeatures />
            <ApiUsageSection />
            <SignUpForm variant={VARIANT} />
            <Footer variant={VARIANT} />
            <style>{ REDESIGN_CSS }</style>
        </div>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    html! {
        <section class="pp-hero2">
            <div class="pp-hero2-wash"></div>
            <div class="pp-glow pp-glow--blue"></div>
            <div class="pp-glow pp-glow--purple"></div>

            <div class="pp-hero2-grid">
                <div class="pp-hero2-copy pp-enter-left">
                    <h1>
                        {"Perfect Pose"}
                        <br />
                        <span class="pp-tint-blue">{"See Yourself Anew."}</span>
                    </h1>
                    <p>
                        {"Unlock your body's full potential with our revolutionary AI-powered biometric analysis. Perfect Pose transforms your device into a personal health and fitness lab."}
                    </p>
                    <div class="pp-button-row pp-enter-up">
                        <a href="#sign-up" class="pp-btn pp-btn--solid">{"Get Started"}</a>
                        <a href="#api-usage" class="pp-btn pp-btn--outline">{"Watch Demo"}</a>
                    </div>
                </div>

                <div class="pp-hero2-phone pp-enter-turn">
                    <div class="pp-phone2">
                        <div class="pp-phone2-screen">
                            <video src="/demo.mov" autoplay=true loop=true muted=true playsinline=true></video>
                            <div class="pp-phone2-dim"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    index: usize,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &FEATURES[props.index];
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::once(0.3));
    let motion = RevealMotion::fade(0.6).slide_y(30.0).staggered(props.index);

    html! {
        <div
            ref={node}
            class={classes!("pp-bento-card", feature.wide.then(|| "pp-span-2"))}
            style={motion.style(visible)}
        >
            <div class="pp-bento-sheen"></div>
            <div class="pp-bento-body">
                <div class={classes!("pp-bento-icon", feature.tint)}>
                    <Icon kind={feature.icon} />
                </div>
                <h3>{ feature.title }</h3>
                <p>{ feature.description }</p>
            </div>
        </div>
    }
}

#[function_component(BentoFeatures)]
fn bento_features() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::once(0.2));

    html! {
        <section id="features" class="pp-section" ref={node}>
            <div class="pp-container">
                <div class="pp-section-head" style={RevealMotion::fade(0.7).slide_y(20.0).style(visible)}>
                    <h2>{"Powerful Features"}</h2>
                    <p>{"Discover what makes Perfect Pose the most advanced fitness companion."}</p>
                </div>
                <div class="pp-bento-grid">
                    { for (0..FEATURES.len()).map(|index| html! { <FeatureCard key={index} {index} /> }) }
                    <div class="pp-bento-image" style={RevealMotion::fade(0.7).scale_from(0.9).delay(0.3).style(visible)}>
                        <img src="/mid.png" alt="Fitness analysis" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ApiUsageSection)]
fn api_usage_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::once(0.2));
    let code = SCAN_EXAMPLE.replace("{api}", VARIANT.documented_api_url());
    let side = |index: usize| RevealMotion::fade(0.7).slide_x(30.0).delay(0.4 + index as f64 * 0.2);

    html! {
        <section id="api-usage" class="pp-section pp-api2" ref={node}>
            <div class="pp-api2-wash"></div>
            <div class="pp-api2-glow"></div>
            <div class="pp-container">
                <div class="pp-section-head" style={RevealMotion::fade(0.7).slide_y(20.0).style(visible)}>
                    <h2>{"Easy-to-Use API"}</h2>
                    <p>{"Integrate Perfect Pose into your application with just a few lines of code. Local, private, and powerful."}</p>
                </div>
                <div class="pp-api2-grid">
                    <div class="pp-editor2" style={RevealMotion::fade(0.7).slide_y(30.0).scale_from(0.98).delay(0.2).style(visible)}>
                        <div class="pp-editor2-bar">
                            <div class="pp-dots"><span></span><span></span><span></span></div>
                            <span class="pp-editor2-file">{"example.py"}</span>
                        </div>
                        <CodeBlock code={code} language={Language::Python} />
                    </div>
                    <div class="pp-api2-side">
                        { for SIDE_CARDS.iter().enumerate().map(|(index, card)| html! {
                            <div key={card.title} class="pp-side-card" style={side(index).style(visible)}>
                                <h3 class={card.tint}>{ card.title }</h3>
                                <p>{ card.body }</p>
                            </div>
                        }) }
                        <div class="pp-center" style={side(SIDE_CARDS.len()).style(visible)}>
                            <Link<Route> to={Route::ApiDocs} classes="pp-btn pp-btn--solid">{"Read API Docs"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const REDESIGN_CSS: &str = r#"
.pp-page {
    background: #000;
    color: #fff;
    min-height: 100vh;
    overflow-x: hidden;
    padding-top: 5rem;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.pp-container { position: relative; z-index: 10; max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.pp-section { position: relative; padding: 5rem 0; background: #000; }
.pp-section-head { text-align: center; margin-bottom: 4rem; }
.pp-section-head h2 { font-size: 3rem; font-weight: 700; }
.pp-section-head p { font-size: 1.125rem; color: #9ca3af; margin: 1rem auto 0; max-width: 48rem; }
.pp-tint-blue { color: #60a5fa; }
.pp-tint-green { color: #4ade80; }
.pp-tint-purple { color: #c084fc; }
.pp-tint-red { color: #f87171; }
.pp-tint-yellow { color: #facc15; }
.pp-tint-indigo { color: #818cf8; }
.pp-button-row { display: flex; flex-wrap: wrap; gap: 1rem; }
.pp-btn {
    display: inline-block;
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-weight: 600;
    color: #fff;
    text-decoration: none;
    transition: all 0.3s;
}
.pp-btn:hover { transform: scale(1.05); }
.pp-btn--solid { background: #2563eb; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3); }
.pp-btn--solid:hover { background: #1d4ed8; }
.pp-btn--outline { border: 2px solid #3b82f6; }
.pp-btn--outline:hover { background: #3b82f6; }
.pp-center { text-align: center; }
.pp-hero2 {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    background: #000;
}
.pp-hero2-wash {
    position: absolute;
    inset: 0;
    opacity: 0.4;
    background: linear-gradient(to bottom right, #1e3a8a, #000, #581c87);
}
.pp-glow {
    position: absolute;
    top: 50%;
    width: 24rem;
    height: 24rem;
    border-radius: 9999px;
    mix-blend-mode: screen;
    filter: blur(64px);
    opacity: 0.2;
    animation: ppGlow 20s ease-in-out infinite alternate;
}
.pp-glow--blue { left: 25%; background: #3b82f6; }
.pp-glow--purple { right: 25%; background: #a855f7; animation-delay: 5s; animation-direction: alternate-reverse; }
@keyframes ppGlow {
    0% { transform: scale(1) rotate(0deg); }
    50% { transform: scale(1.2) rotate(90deg); }
    100% { transform: scale(1) rotate(0deg); }
}
.pp-hero2-grid {
    position: relative;
    z-index: 10;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}
.pp-hero2-copy h1 { font-size: 4.5rem; font-weight: 700; line-height: 1.1; margin-bottom: 1.5rem; }
.pp-hero2-copy p { font-size: 1.25rem; color: #d1d5db; max-width: 32rem; margin-bottom: 2rem; }
.pp-enter-left { animation: ppEnterLeft 0.8s ease-out both; }
.pp-enter-up { animation: ppEnterUp 0.8s ease-out 0.3s both; }
.pp-enter-turn { animation: ppEnterTurn 1s ease-out 0.2s both; }
@keyframes ppEnterLeft { from { opacity: 0; transform: translateX(-50px); } to { opacity: 1; transform: none; } }
@keyframes ppEnterUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes ppEnterTurn {
    from { opacity: 0; transform: scale(0.8) rotateY(-30deg); }
    to { opacity: 1; transform: none; }
}
.pp-hero2-phone { perspective: 1000px; display: flex; justify-content: center; align-items: center; }
.pp-phone2 {
    width: 20rem;
    height: 640px;
    padding: 1rem;
    background: linear-gradient(to bottom right, #1f2937, #111827);
    border: 2px solid rgba(255, 255, 255, 0.1);
    border-radius: 3.5rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    transition: transform 0.5s ease-out;
}
.pp-phone2:hover { transform: scale(1.05); }
.pp-phone2-screen { position: relative; width: 100%; height: 100%; background: #000; border-radius: 3rem; overflow: hidden; }
.pp-phone2-screen video { width: 100%; height: 100%; object-fit: cover; }
.pp-phone2-dim { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.2); }
.pp-bento-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.pp-span-2 { grid-column: span 2; }
.pp-bento-card, .pp-bento-image {
    position: relative;
    overflow: hidden;
    border-radius: 1.5rem;
    padding: 2rem;
    background: rgba(17, 24, 39, 0.5);
    border: 1px solid rgba(255, 255, 255, 0.1);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
}
.pp-bento-image { grid-row: span 2; display: flex; align-items: center; justify-content: center; }
.pp-bento-image img { width: 100%; height: 100%; object-fit: contain; }
.pp-bento-sheen {
    position: absolute;
    inset: 0;
    opacity: 0;
    background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), transparent);
    transition: opacity 0.5s;
}
.pp-bento-card:hover .pp-bento-sheen { opacity: 1; }
.pp-bento-body { position: relative; z-index: 10; }
.pp-bento-icon { width: 2rem; height: 2rem; margin-bottom: 1rem; }
.pp-bento-body h3 { font-size: 1.5rem; font-weight: 600; margin-bottom: 0.75rem; }
.pp-bento-body p { color: #9ca3af; }
.pp-api2 { overflow: hidden; }
.pp-api2-wash { position: absolute; inset: 0; background: linear-gradient(to top, #000, rgba(30, 58, 138, 0.2), #000); }
.pp-api2-glow {
    position: absolute;
    top: -50%;
    left: 25%;
    width: 24rem;
    height: 24rem;
    border-radius: 9999px;
    background: #3b82f6;
    mix-blend-mode: screen;
    filter: blur(64px);
    opacity: 0.1;
    animation: ppPulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}
@keyframes ppPulse { 50% { opacity: 0.05; } }
.pp-api2-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; align-items: start; }
.pp-editor2 { background: rgba(17, 24, 39, 0.5); border-radius: 1rem; box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.1); }
.pp-editor2 .pp-code-block { border: none; background: transparent; margin: 0; }
.pp-editor2 .pp-code-block code { white-space: pre; }
.pp-editor2-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    background: rgba(31, 41, 55, 0.6);
    border-radius: 1rem 1rem 0 0;
}
.pp-editor2-file { color: #9ca3af; font-size: 0.875rem; font-family: ui-monospace, monospace; }
.pp-dots { display: flex; gap: 0.5rem; }
.pp-dots span { width: 0.75rem; height: 0.75rem; border-radius: 9999px; }
.pp-dots span:nth-child(1) { background: #ef4444; }
.pp-dots span:nth-child(2) { background: #eab308; }
.pp-dots span:nth-child(3) { background: #22c55e; }
.pp-api2-side { display: flex; flex-direction: column; gap: 2rem; }
.pp-side-card { background: rgba(17, 24, 39, 0.5); padding: 1.5rem; border-radius: 1rem; border: 1px solid rgba(255, 255, 255, 0.1); }
.pp-side-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.pp-side-card p { color: #9ca3af; }
@media (max-width: 1024px) {
    .pp-api2-grid { grid-template-columns: 1fr; }
}
@media (max-width: 768px) {
    .pp-hero2-grid, .pp-bento-grid { grid-template-columns: 1fr; }
    .pp-span-2 { grid-column: auto; }
    .pp-bento-image { grid-row: auto; }
    .pp-hero2-copy h1 { font-size: 3rem; }
}
"#;
