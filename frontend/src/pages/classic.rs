use yew::prelude::*;
use yew_router::prelude::*;

use crate::clipboard::use_copy_feedback;
use crate::components::footer::Footer;
use crate::config::{self, SiteVariant};
use crate::nav::{use_landing_scroll, Nav};
use crate::parallax::ParallaxBanner;
use crate::reveal::{use_reveal, RevealMotion, RevealOptions};
use crate::signup::SignUpForm;
use crate::Route;

const VARIANT: SiteVariant = SiteVariant::Classic;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature { icon: "❤️", title: "Contactless Vital Signs", description: "Measure your heart rate, skin temperature, and blood pressure without any extra hardware." },
    Feature { icon: "📏", title: "Accurate Biometric Data", description: "Get precise estimations of your height, weight, and BMI." },
    Feature { icon: "🤸", title: "Real-time Exercise Analysis", description: "Get feedback on your exercise form to maximize effectiveness and prevent injury." },
    Feature { icon: "📈", title: "Personalized Insights", description: "Track your progress over time with detailed reports and historical data." },
    Feature { icon: "🔒", title: "Secure and Private", description: "Your data is processed securely, and your privacy is our priority." },
    Feature { icon: "🤖", title: "State-of-the-Art AI", description: "Built with PyTorch, YOLOv8, MediaPipe, and custom models for best-in-class analysis." },
];

struct Product {
    title: &'static str,
    description: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

const PRODUCTS: &[Product] = &[
    Product {
        title: "Basic",
        description: "For individuals and enthusiasts starting with biometric analysis.",
        price: "$49",
        features: &["Up to 10 scans per day", "Basic vital signs", "Biometric estimations", "Limited support"],
        highlighted: false,
    },
    Product {
        title: "Pro",
        description: "For professionals and developers who need advanced features.",
        price: "$99",
        features: &["Unlimited scans", "All vital signs", "Advanced exercise analysis", "Priority support", "API access"],
        highlighted: true,
    },
    Product {
        title: "Enterprise",
        description: "For large-scale applications and custom integrations.",
        price: "Custom",
        features: &["Volume licensing", "Custom model training", "Dedicated support", "On-premise deployment"],
        highlighted: false,
    },
];

const SCAN_EXAMPLE: &str = r#"import requests
import time
import json

# The API runs on your local machine
API_URL = "{api}"

def run_perfect_pose_scan():
    """
    Initiates a scan and retrieves the results.
    """
    # 1. Start the scan
    start_endpoint = f"{API_URL}/run_complete_scan"
    payload = {
        "user_id": "example-user-123",
        "user_name": "Example User"
    }

    print("Starting Perfect Pose scan...")
    try:
        start_response = requests.post(start_endpoint, json=payload)
        if start_response.status_code != 200:
            print(f"Error starting scan: {start_response.text}")
            return

        print("Scan process initiated. A camera window should open on the server.")
        print("Please complete the scan process on the server machine.")

    except requests.ConnectionError as e:
        print(f"Connection Error: Could not connect to the API at {API_URL}.")
        print("Please ensure the Perfect Pose server is running.")
        return

    # 2. Poll for results
    # In a real-world app, you'd poll the /api/status endpoint until the scan is complete.
    # For this example, we'll just wait a fixed amount of time.
    print("\nWaiting for analysis to complete... (simulating a 45-second scan)")
    time.sleep(45)

    # 3. Fetch the results
    results_endpoint = f"{API_URL}/get_latest_results"
    print("Fetching results...")
    try:
        results_response = requests.get(results_endpoint)
        if results_response.status_code == 200:
            print("Results retrieved successfully!")
            return results_response.json()
        else:
            print(f"Error retrieving results: {results_response.text}")
            return None
    except requests.ConnectionError as e:
        print(f"Connection Error: Could not connect to the API at {API_URL}.")
        return None


# Example usage:
if __name__ == "__main__":
    scan_result = run_perfect_pose_scan()
    if scan_result:
        print("\n--- Biometric Scan Report ---")
        print(json.dumps(scan_result, indent=2))
        print("-----------------------------")"#;

#[function_component(ClassicHome)]
pub fn classic_home() -> Html {
    use_landing_scroll();

    html! {
        <div class="pp-page pp-classic">
            <Nav variant={VARIANT} />
            <HeroSection />
            <PhoneSection />
            <FeaturesSection />
            <ProductsSection />
            <ApiUsageSection />
            <SignUpForm variant={VARIANT} />
            <Footer variant={VARIANT} />
            <style>{ CLASSIC_CSS }</style>
        </div>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    html! {
        <ParallaxBanner image="/header.png" class={classes!("pp-hero")}>
            <div class="pp-fade-up"></div>
            <div class="pp-hero-content">
                <h1>{"Perfect Pose"}</h1>
                <p class="pp-hero-lead">
                    {"The Future of Fitness is Here. See Yourself in a New Way with Perfect Pose."}
                </p>
                <p class="pp-hero-sub">
                    {"Unlock your body's full potential with our revolutionary AI-powered biometric analysis system. Perfect Pose uses your device's camera to transform it into a personal health and fitness lab."}
                </p>
                <div class="pp-button-row">
                    <a href="#sign-up" class="pp-btn pp-btn--solid">{"Get Started"}</a>
                    <a href="#features" class="pp-btn pp-btn--outline">{"Learn More"}</a>
                </div>
            </div>
        </ParallaxBanner>
    }
}

#[function_component(PhoneSection)]
fn phone_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::toggle(0.3));

    html! {
        <section ref={node}>
            <ParallaxBanner image="/mid.png" class={classes!("pp-phone-section")}>
                <div class="pp-fade-both"></div>
                <div class="pp-phone-grid">
                    <div class="pp-phone-wrap" style={RevealMotion::fade(1.0).style(visible)}>
                        <div class="pp-phone">
                            <div class="pp-phone-screen">
                                <video src="/demo.mov" autoplay=true loop=true muted=true playsinline=true></video>
                            </div>
                        </div>
                    </div>
                    <div class="pp-phone-copy" style={RevealMotion::fade(1.0).slide_x(50.0).delay(0.3).style(visible)}>
                        <h2>{"What is Perfect Pose?"}</h2>
                        <p>
                            {"Perfect Pose is a cutting-edge application that provides a deep understanding of your physical health and exercise performance, all from a simple video scan. Our patent-pending technology analyzes your body's movements, form, and even your vital signs to deliver insights that were once only available in professional sports labs."}
                        </p>
                        <h3>{"How It Works"}</h3>
                        <p>
                            {"Our system uses advanced computer vision and a sophisticated AI pipeline to analyze your biometric data. By simply following the on-screen instructions during a scan, Perfect Pose captures and processes information about your physique and vital signs with incredible precision. The result is a comprehensive health profile that helps you track your progress, optimize your workouts, and achieve your fitness goals faster."}
                        </p>
                        <a href="#sign-up" class="pp-btn pp-btn--solid">{"Try It Now"}</a>
                    </div>
                </div>
            </ParallaxBanner>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    index: usize,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::toggle(0.5));
    let motion = RevealMotion::fade(0.6).slide_y(30.0).scale_from(0.9).staggered(props.index);

    html! {
        <div ref={node} class="pp-card pp-card--lift" style={motion.style(visible)}>
            <div class="pp-card-icon">{ props.icon }</div>
            <h3 class="pp-card-title pp-card-title--blue">{ props.title }</h3>
            <p class="pp-card-text">{ props.description }</p>
        </div>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    html! {
        <section id="features">
            <ParallaxBanner image="/mid.png" class={classes!("pp-section")}>
                <div class="pp-fade-both"></div>
                <div class="pp-container">
                    <h2 class="pp-section-title">{"Powerful Features"}</h2>
                    <div class="pp-grid-3">
                        { for FEATURES.iter().enumerate().map(|(index, f)| html! {
                            <FeatureCard key={index} icon={f.icon} title={f.title} description={f.description} {index} />
                        }) }
                    </div>
                </div>
            </ParallaxBanner>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    index: usize,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let product = &PRODUCTS[props.index];
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::toggle(0.5));
    let motion = RevealMotion::fade(0.6).scale_from(0.9).staggered(props.index);

    html! {
        <div
            ref={node}
            class={classes!("pp-card", "pp-card--lift", product.highlighted.then(|| "pp-card--highlight"))}
            style={motion.style(visible)}
        >
            <h3 class="pp-card-title">{ product.title }</h3>
            <p class="pp-card-text">{ product.description }</p>
            <div class="pp-price">{ product.price }</div>
            <ul class="pp-checklist">
                { for product.features.iter().map(|feature| html! {
                    <li key={*feature}>
                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path>
                        </svg>
                        { *feature }
                    </li>
                }) }
            </ul>
            <a
                href="#sign-up"
                class={classes!("pp-btn-block", if product.highlighted { "pp-btn-block--solid" } else { "pp-btn-block--ghost" })}
            >
                { if product.highlighted { "Get Started" } else { "Contact Us" } }
            </a>
        </div>
    }
}

#[function_component(ProductsSection)]
fn products_section() -> Html {
    html! {
        <section id="products" class="pp-section">
            <div class="pp-container">
                <h2 class="pp-section-title">{"Pricing Plans"}</h2>
                <div class="pp-grid-3">
                    { for (0..PRODUCTS.len()).map(|index| html! { <ProductCard key={index} {index} /> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ApiUsageSection)]
fn api_usage_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::once(0.2));
    let expanded = use_state(|| false);
    let clipboard = use_copy_feedback(config::COPY_CONFIRMATION_MS);
    let code = SCAN_EXAMPLE.replace("{api}", VARIANT.documented_api_url());

    let on_copy = {
        let copy = clipboard.copy.clone();
        let code = code.clone();
        Callback::from(move |_: MouseEvent| copy.emit(code.trim().to_string()))
    };

    let on_expand = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let step = |delay: f64, rise: f64| RevealMotion::fade(0.7).slide_y(rise).delay(delay);

    html! {
        <section id="api-usage" class="pp-section pp-bg-grid" ref={node}>
            <div class="pp-container">
                <h2 class="pp-section-title pp-tight" style={step(0.0, 20.0).style(visible)}>{"Easy-to-Use API"}</h2>
                <p class="pp-section-sub" style={step(0.2, 20.0).style(visible)}>
                    {"Integrate Perfect Pose into your application with just a few lines of code."}
                </p>
                <div class="pp-grid-2">
                    <div class="pp-prose" style={step(0.3, 30.0).style(visible)}>
                        <h3>{"Simple, Powerful, and Local"}</h3>
                        <p>{"Perfect Pose runs a lightweight server on your local machine, ensuring that your biometric data never leaves your control. Privacy is paramount, and your data stays with you."}</p>
                        <p>{"The API is designed for ultimate simplicity. A single POST request kicks off a scan, and a GET request retrieves the detailed analysis. There's no need for complex authentication or rate limits, just straightforward, immediate results. This local-first approach also means the API is incredibly fast and reliable."}</p>
                        <p>
                            {"This Python example demonstrates a typical polling workflow. In a real-world application, you would poll the "}
                            <code>{"/api/status"}</code>
                            {" endpoint until the scan is complete, at which point you can fetch the comprehensive results. The local server provides a camera feed for the user to interact with, making the process seamless."}
                        </p>
                        <p>{"Our goal is to provide developers with a powerful tool that is easy to integrate, respects user privacy, and delivers consistent performance. Get up and running in minutes, not days."}</p>
                    </div>
                    <div class="pp-editor" style={step(0.4, 30.0).scale_from(0.98).style(visible)}>
                        <div class="pp-editor-bar">
                            <div class="pp-dots"><span></span><span></span><span></span></div>
                            <span class="pp-editor-file">{"example.py"}</span>
                            <div class="pp-editor-spacer"></div>
                        </div>
                        <div class={classes!("pp-editor-body", (!*expanded).then(|| "collapsed"))}>
                            <pre><code class="language-python">{ code }</code></pre>
                            <button class="pp-copy" onclick={on_copy}>
                                { if clipboard.copied { "Copied!" } else { "Copy" } }
                            </button>
                        </div>
                        <div class="pp-editor-foot">
                            <button class="pp-link-button" onclick={on_expand}>
                                { if *expanded { "Show less" } else { "Show full example" } }
                            </button>
                        </div>
                    </div>
                </div>
                <div class="pp-center pp-mt">
                    <Link<Route> to={Route::ClassicApiDocs} classes="pp-btn pp-btn--solid">{"Read API Docs"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}

pub(crate) const CLASSIC_CSS: &str = r#"
.pp-page {
    background: #000;
    color: #fff;
    min-height: 100vh;
    overflow-x: hidden;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.pp-container { position: relative; z-index: 1; max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.pp-section { padding: 5rem 0; }
.pp-section-title { font-size: 3rem; font-weight: 700; text-align: center; margin-bottom: 4rem; }
.pp-section-title.pp-tight { margin-bottom: 1rem; }
.pp-section-sub { font-size: 1.125rem; color: #9ca3af; text-align: center; margin-bottom: 4rem; }
.pp-bg-grid {
    background-color: #000;
    background-image: url("data:image/svg+xml,%3csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 32 32' width='32' height='32' fill='none' stroke='rgb(15 23 42 / 0.1)'%3e%3cpath d='M0 .5H31.5V32'/%3e%3c/svg%3e");
}
.pp-fade-up, .pp-fade-both {
    position: absolute;
    inset: 0;
    z-index: 1;
    pointer-events: none;
}
.pp-fade-up { background: linear-gradient(to top, #000, transparent, transparent); }
.pp-fade-both { background: linear-gradient(to bottom, #000, transparent, #000); }
.pp-hero { height: 100vh; }
.pp-hero-content {
    position: relative;
    z-index: 10;
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0 1.5rem;
}
.pp-hero-content h1 { font-size: 6rem; font-weight: 700; margin-bottom: 1.5rem; }
.pp-hero-lead { font-size: 1.875rem; color: #e5e7eb; max-width: 48rem; margin-bottom: 1rem; }
.pp-hero-sub { font-size: 1.25rem; color: #d1d5db; max-width: 42rem; margin-bottom: 2.5rem; }
.pp-button-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
.pp-btn {
    display: inline-block;
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-weight: 600;
    color: #fff;
    text-decoration: none;
    transition: all 0.3s;
}
.pp-btn--solid { background: #2563eb; }
.pp-btn--solid:hover { background: #1d4ed8; transform: scale(1.05); }
.pp-btn--outline { border: 2px solid #3b82f6; }
.pp-btn--outline:hover { background: #3b82f6; }
.pp-phone-section { min-height: 100vh; padding: 5rem 0; display: flex; align-items: center; }
.pp-phone-grid {
    position: relative;
    z-index: 2;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}
.pp-phone-wrap { perspective: 1000px; }
.pp-phone {
    position: relative;
    width: 18rem;
    height: 600px;
    margin: 0 auto;
    background: linear-gradient(to bottom right, #1f2937, #111827);
    border-radius: 3rem;
    padding: 0.75rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}
.pp-phone-screen { width: 100%; height: 100%; background: #000; border-radius: 2.5rem; overflow: hidden; }
.pp-phone-screen video { width: 100%; height: 100%; object-fit: cover; }
.pp-phone-copy h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
.pp-phone-copy h3 { font-size: 2.25rem; font-weight: 700; margin: 2rem 0 1.5rem; }
.pp-phone-copy p { color: #d1d5db; font-size: 1.125rem; margin-bottom: 1rem; }
.pp-grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: start; }
.pp-grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.pp-card {
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(16px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    padding: 2rem;
}
.pp-card--lift:hover { background: rgba(255, 255, 255, 0.1); border-color: #3b82f6; }
.pp-card--highlight { border-color: #3b82f6; }
.pp-card-icon { font-size: 3rem; margin-bottom: 1rem; }
.pp-card-title { font-size: 1.875rem; font-weight: 600; margin-bottom: 0.75rem; }
.pp-card-title--blue { font-size: 1.5rem; color: #60a5fa; }
.pp-card-text { color: #9ca3af; margin-bottom: 1.5rem; }
.pp-price { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
.pp-checklist { list-style: none; padding: 0; color: #d1d5db; margin-bottom: 2rem; }
.pp-checklist li { display: flex; align-items: center; margin-bottom: 0.75rem; }
.pp-checklist svg { width: 1.25rem; height: 1.25rem; margin-right: 0.75rem; color: #4ade80; }
.pp-btn-block {
    display: block;
    text-align: center;
    padding: 0.75rem;
    border-radius: 0.5rem;
    font-weight: 600;
    color: #fff;
    text-decoration: none;
    transition: background 0.3s;
}
.pp-btn-block--solid { background: #2563eb; }
.pp-btn-block--solid:hover { background: #1d4ed8; }
.pp-btn-block--ghost { background: rgba(255, 255, 255, 0.1); }
.pp-btn-block--ghost:hover { background: rgba(255, 255, 255, 0.2); }
.pp-prose { color: #d1d5db; font-size: 1.125rem; padding-right: 1rem; }
.pp-prose h3 { font-size: 1.875rem; font-weight: 700; color: #fff; margin-bottom: 1rem; }
.pp-prose p { margin-bottom: 1.25rem; line-height: 1.75; }
.pp-prose code { background: #1e293b; padding: 0.1rem 0.3rem; border-radius: 0.25rem; }
.pp-editor { background: #0f172a; border-radius: 0.75rem; box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.1); }
.pp-editor-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    background: rgba(30, 41, 59, 0.8);
    border-radius: 0.75rem 0.75rem 0 0;
}
.pp-dots { display: flex; gap: 0.5rem; }
.pp-dots span { width: 0.75rem; height: 0.75rem; border-radius: 9999px; }
.pp-dots span:nth-child(1) { background: #ef4444; }
.pp-dots span:nth-child(2) { background: #eab308; }
.pp-dots span:nth-child(3) { background: #22c55e; }
.pp-editor-file { color: #9ca3af; font-size: 0.875rem; font-family: ui-monospace, monospace; }
.pp-editor-spacer { width: 5rem; }
.pp-editor-body { position: relative; padding: 1rem; transition: all 0.3s; }
.pp-editor-body.collapsed { max-height: 24rem; overflow-y: auto; }
.pp-editor-body pre { margin: 0; }
.pp-editor-body code { font-family: ui-monospace, monospace; font-size: 0.875rem; color: #e2e8f0; white-space: pre; }
.pp-copy {
    position: absolute;
    top: 1rem;
    right: 1rem;
    padding: 0.25rem 0.75rem;
    font-size: 0.875rem;
    color: #9ca3af;
    background: rgba(51, 65, 85, 0.5);
    border: none;
    border-radius: 0.375rem;
    cursor: pointer;
}
.pp-copy:hover { color: #fff; background: #334155; }
.pp-editor-foot { padding: 1rem; text-align: center; background: rgba(30, 41, 59, 0.5); border-radius: 0 0 0.75rem 0.75rem; }
.pp-link-button { background: none; border: none; color: #60a5fa; font-weight: 600; font-size: 0.875rem; cursor: pointer; }
.pp-link-button:hover { color: #93c5fd; }
.pp-center { text-align: center; }
.pp-mt { margin-top: 4rem; }
@media (max-width: 1024px) {
    .pp-grid-3 { grid-template-columns: 1fr 1fr; }
    .pp-grid-2 { grid-template-columns: 1fr; }
}
@media (max-width: 768px) {
    .pp-grid-3, .pp-phone-grid { grid-template-columns: 1fr; }
    .pp-hero-content h1 { font-size: 3.75rem; }
}
"#;
