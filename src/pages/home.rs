use chrono::Datelike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::magical_button::{ButtonVariant, MagicalButton};
use crate::components::mesh_background::{MeshBackground, MeshVariant};
use crate::components::section_card::{CardVariant, SectionCard};
use crate::config;
use crate::effects::hooks::use_magic_dust;

fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(section) = document.get_element_by_id(id) {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(SiteNav)]
fn site_nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let nav_button = |label: &'static str, target: &'static str| {
        html! {
            <button
                class="nav-link"
                onclick={Callback::from(move |_: MouseEvent| scroll_to_section(target))}
            >
                {label}
            </button>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <button
                    class="nav-logo"
                    onclick={Callback::from(|_: MouseEvent| scroll_to_section("hero"))}
                >
                    {"CLOVER"}
                </button>
                <div class="nav-links">
                    { nav_button("Home", "hero") }
                    { nav_button("About", "about") }
                    { nav_button("Services", "services") }
                    { nav_button("Pricing", "pricing") }
                    { nav_button("Contact", "contact") }
                </div>
            </div>
        </nav>
    }
}

fn pillar_card(icon: &str, title: &str, text: &str) -> Html {
    html! {
        <SectionCard variant={CardVariant::Mystical} class={classes!("pillar-card")}>
            <div class="card-icon">{icon.to_string()}</div>
            <h3>{title.to_string()}</h3>
            <p>{text.to_string()}</p>
        </SectionCard>
    }
}

fn service_card(icon: &str, title: &str, text: &str) -> Html {
    html! {
        <SectionCard variant={CardVariant::Mystical} class={classes!("service-card")}>
            <div class="card-icon">{icon.to_string()}</div>
            <h3>{title.to_string()}</h3>
            <p>{text.to_string()}</p>
        </SectionCard>
    }
}

fn pricing_card(name: &str, blurb: &str, price: &str, features: &[&str], popular: bool) -> Html {
    let open_form = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(config::get_interest_form_url(), "_blank");
        }
    });

    html! {
        <SectionCard
            variant={CardVariant::Grimoire}
            class={classes!("pricing-card", popular.then_some("popular"))}
        >
            {
                if popular {
                    html! { <span class="popular-badge">{"Most Popular"}</span> }
                } else {
                    html! {}
                }
            }
            <h3 class="tier-name">{name.to_string()}</h3>
            <p class="tier-blurb">{blurb.to_string()}</p>
            <div class="tier-price">
                {price.to_string()}
                <span class="tier-period">{"/mo"}</span>
            </div>
            <ul class="tier-features">
                { for features.iter().map(|feature| html! { <li>{"✦ "}{feature.to_string()}</li> }) }
            </ul>
            <MagicalButton variant={ButtonVariant::Gold} class={classes!("tier-cta")} onclick={open_form}>
                {"Express Interest"}
            </MagicalButton>
        </SectionCard>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_magic_dust();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Reveal sections as they enter the viewport
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_for_cb = window.clone();

            let reveal_callback = Closure::wrap(Box::new(move || {
                let viewport = window_for_cb
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                if let Ok(nodes) = document.query_selector_all(".reveal") {
                    for i in 0..nodes.length() {
                        if let Some(node) = nodes.item(i) {
                            if let Ok(element) = node.dyn_into::<Element>() {
                                let rect = element.get_bounding_client_rect();
                                if rect.top() < viewport * 0.85
                                    && !element.class_name().contains("visible")
                                {
                                    let classes = element.class_name();
                                    element.set_class_name(&format!("{} visible", classes));
                                }
                            }
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    reveal_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Initial check for content already on screen
            reveal_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        reveal_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    let year = chrono::Utc::now().year();

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: background 0.3s ease, border-color 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(10, 15, 10, 0.92);
                        backdrop-filter: blur(8px);
                        border-bottom-color: rgba(20, 83, 45, 0.3);
                    }
                    .nav-content {
                        max-width: 1180px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-family: 'Cinzel', serif;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--gold-soft);
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-family: 'Cinzel', serif;
                        font-size: 1rem;
                        color: #d1d5db;
                        padding: 0.5rem 0.75rem;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: var(--gold-soft);
                    }
                    @media (max-width: 720px) {
                        .nav-links { display: none; }
                    }

                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .hero-title {
                        font-family: 'Cinzel', serif;
                        font-size: clamp(4rem, 12vw, 9rem);
                        font-weight: 700;
                        color: var(--gold-soft);
                        margin: 0 0 1.5rem;
                        text-shadow: 0 4px 24px rgba(245, 215, 110, 0.25);
                    }
                    .hero-tagline {
                        font-family: 'Cinzel', serif;
                        font-size: clamp(1.25rem, 3vw, 1.9rem);
                        color: rgba(245, 215, 110, 0.9);
                        margin-bottom: 2rem;
                    }

                    .page-section {
                        padding: 5rem 1.5rem;
                    }
                    .section-inner {
                        max-width: 1180px;
                        margin: 0 auto;
                    }
                    .section-head {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-head h2 {
                        font-family: 'Cinzel', serif;
                        font-size: clamp(2rem, 5vw, 3rem);
                        color: var(--gold-soft);
                        margin-bottom: 1rem;
                    }
                    .section-head p {
                        font-size: 1.2rem;
                        color: #d1d5db;
                        max-width: 46rem;
                        margin: 0 auto;
                    }

                    .pillar-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                    }
                    .pillar-card, .service-card {
                        text-align: center;
                    }
                    .card-icon {
                        font-size: 2rem;
                        width: 3.5rem;
                        height: 3.5rem;
                        margin: 0 auto 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: linear-gradient(135deg, var(--emerald-medium), var(--emerald-dark));
                    }
                    .pillar-card h3, .service-card h3 {
                        font-family: 'Cinzel', serif;
                        font-size: 1.2rem;
                        color: var(--gold-soft);
                        margin-bottom: 0.75rem;
                    }
                    .pillar-card p, .service-card p {
                        color: #d1d5db;
                        font-size: 0.9rem;
                    }

                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .pricing-card {
                        position: relative;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                    }
                    .pricing-card.popular {
                        border-color: rgba(245, 215, 110, 0.5);
                    }
                    .popular-badge {
                        position: absolute;
                        top: -0.8rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: var(--gold-soft);
                        color: var(--black-rich);
                        padding: 0.2rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.8rem;
                        font-weight: 700;
                    }
                    .tier-name {
                        font-family: 'Cinzel', serif;
                        font-size: 1.5rem;
                        color: var(--gold-soft);
                        margin-bottom: 0.5rem;
                    }
                    .tier-blurb {
                        color: #9ca3af;
                        margin-bottom: 1.5rem;
                    }
                    .tier-price {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: var(--emerald-medium);
                        margin-bottom: 1.5rem;
                    }
                    .tier-period {
                        font-size: 1rem;
                        color: #9ca3af;
                    }
                    .tier-features {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 2rem;
                        text-align: left;
                        color: #d1d5db;
                        flex-grow: 1;
                    }
                    .tier-features li {
                        margin-bottom: 0.75rem;
                    }
                    .custom-card {
                        max-width: 42rem;
                        margin: 3rem auto 0;
                        text-align: center;
                    }
                    .custom-card p {
                        color: #d1d5db;
                        margin-bottom: 1.5rem;
                    }

                    .contact-section .section-inner {
                        max-width: 44rem;
                    }

                    .site-footer {
                        border-top: 1px solid rgba(20, 83, 45, 0.3);
                        padding: 3rem 1.5rem;
                    }
                    .footer-grid {
                        max-width: 1180px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .footer-brand h3 {
                        font-family: 'Cinzel', serif;
                        font-size: 1.5rem;
                        color: var(--gold-soft);
                        margin-bottom: 1rem;
                    }
                    .footer-brand p, .footer-note {
                        color: #9ca3af;
                        font-size: 0.9rem;
                    }
                    .footer-links h4, .footer-social h4 {
                        font-family: 'Cinzel', serif;
                        color: var(--gold-soft);
                        margin-bottom: 1rem;
                    }
                    .footer-links button {
                        display: block;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #9ca3af;
                        padding: 0.25rem 0;
                        transition: color 0.2s ease;
                    }
                    .footer-links button:hover {
                        color: var(--gold-soft);
                    }
                    .footer-social a {
                        display: inline-block;
                        margin-right: 1rem;
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .footer-social a:hover {
                        color: var(--gold-soft);
                    }
                "#}
            </style>

            <SiteNav />

            <MeshBackground variant={MeshVariant::Light}>
                <section id="hero" class="hero">
                    <div class="reveal">
                        <h1 class="hero-title">{"CLOVER"}</h1>
                        <p class="hero-tagline">{"Unleash the magic of marketing"}</p>
                        <button
                            class="btn-magical-transparent"
                            onclick={Callback::from(|_: MouseEvent| scroll_to_section("services"))}
                        >
                            {"Explore our magic"}
                        </button>
                    </div>
                </section>
            </MeshBackground>

            <MeshBackground variant={MeshVariant::Dark}>
                <section id="about" class="page-section">
                    <div class="section-inner">
                        <div class="section-head reveal">
                            <h2>{"The Five Enchanted Leaves"}</h2>
                            <p>{"Each leaf of our mystical clover represents a fundamental pillar of marketing magic"}</p>
                        </div>
                        <div class="pillar-grid reveal">
                            { pillar_card("💎", "Product", "The essence of your offering, crafted with precision and imbued with value.") }
                            { pillar_card("🪙", "Price", "The alchemical balance between value and cost, transmuting worth into exchange.") }
                            { pillar_card("📣", "Promotion", "The art of enchantment through storytelling, weaving compelling narratives.") }
                            { pillar_card("📍", "Place", "Strategic positioning across realms, ensuring your presence manifests solutions.") }
                            { pillar_card("👥", "People", "The human connection that breathes life into every interaction and loyalty.") }
                        </div>
                    </div>
                </section>
            </MeshBackground>

            <MeshBackground variant={MeshVariant::Light}>
                <section id="services" class="page-section">
                    <div class="section-inner">
                        <div class="section-head reveal">
                            <h2>{"Our Spellbook"}</h2>
                            <p>{"Ancient wisdom meets modern magic in our comprehensive marketing services"}</p>
                        </div>
                        <div class="services-grid reveal">
                            { service_card("🌐", "Digital Presence", "Manifest your brand across the digital realm with mystical web experiences that captivate and convert.") }
                            { service_card("✴️", "Social Sorcery", "Weave compelling narratives across social platforms, building communities that rally around your brand.") }
                            { service_card("🎨", "Design Enchantment", "Forge visual identities that resonate with power, from mystical logos to captivating marketing materials.") }
                            { service_card("🧙", "Web Wizardry", "Craft digital sanctuaries where your audience finds exactly what their souls seek, built with modern magic.") }
                        </div>
                    </div>
                </section>
            </MeshBackground>

            <MeshBackground variant={MeshVariant::Dark}>
                <section id="pricing" class="page-section">
                    <div class="section-inner">
                        <div class="section-head reveal">
                            <h2>{"Grimoires of Power"}</h2>
                            <p>{"Choose your path to marketing mastery with our enchanted service packages"}</p>
                        </div>
                        <div class="pricing-grid reveal">
                            { pricing_card(
                                "Spark",
                                "Perfect for emerging ventures",
                                "₹999",
                                &[
                                    "Reels, Posts, Stories (any 2 platforms)",
                                    "Carousel design",
                                    "Custom Campaigns",
                                    "Social Media Creation",
                                ],
                                false,
                            ) }
                            { pricing_card(
                                "Mystic",
                                "For growing businesses",
                                "₹2499",
                                &[
                                    "Everything in Spark",
                                    "Business card/Flyer designs",
                                    "Social media management",
                                    "Content Calendar",
                                    "Mini Social Media Audit (report only)",
                                ],
                                true,
                            ) }
                            { pricing_card(
                                "Master",
                                "Complete marketing mastery",
                                "₹3499",
                                &[
                                    "Everything in Mystic",
                                    "Brand Makeover",
                                    "Advanced automation",
                                    "Event Support",
                                    "Priority support",
                                ],
                                false,
                            ) }
                        </div>
                        <div class="custom-card reveal">
                            <SectionCard variant={CardVariant::Grimoire}>
                                <h3 class="tier-name">{"Custom Enchantment"}</h3>
                                <p>{"Need something beyond our standard grimoires? Let us craft a bespoke magical solution tailored to your unique vision. (We provide user acquisition and website development services.)"}</p>
                                <MagicalButton onclick={Callback::from(|_: MouseEvent| scroll_to_section("contact"))}>
                                    {"Commission Custom Magic"}
                                </MagicalButton>
                            </SectionCard>
                        </div>
                    </div>
                </section>
            </MeshBackground>

            <MeshBackground variant={MeshVariant::Light}>
                <section id="contact" class="page-section contact-section">
                    <div class="section-inner">
                        <div class="section-head reveal">
                            <h2>{"Cast a Message"}</h2>
                            <p>{"Send your intentions across the mystical realm and let us weave magic together"}</p>
                        </div>
                        <div class="reveal">
                            <SectionCard variant={CardVariant::Scroll} hover={false}>
                                <ContactForm />
                            </SectionCard>
                        </div>
                    </div>
                </section>
            </MeshBackground>

            <MeshBackground variant={MeshVariant::Dark}>
                <footer class="site-footer">
                    <div class="footer-grid">
                        <div class="footer-brand">
                            <h3>{"CLOVER"}</h3>
                            <p>{"Unleashing the magic of marketing for visionary brands across all realms."}</p>
                            <p class="footer-note">
                                {format!("© {} Clover Marketing Agency. All magical rights reserved.", year)}
                            </p>
                        </div>
                        <div class="footer-links">
                            <h4>{"Quick Portals"}</h4>
                            <button onclick={Callback::from(|_: MouseEvent| scroll_to_section("about"))}>{"About"}</button>
                            <button onclick={Callback::from(|_: MouseEvent| scroll_to_section("services"))}>{"Services"}</button>
                            <button onclick={Callback::from(|_: MouseEvent| scroll_to_section("pricing"))}>{"Pricing"}</button>
                            <button onclick={Callback::from(|_: MouseEvent| scroll_to_section("contact"))}>{"Contact"}</button>
                        </div>
                        <div class="footer-social">
                            <h4>{"Follow Our Magic"}</h4>
                            <a href="https://www.linkedin.com/company/growwithcloveragency" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                            <a href="https://x.com/GrowWithClover_" target="_blank" rel="noopener noreferrer">{"X"}</a>
                            <a href="https://www.instagram.com/growwithclover_" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                            <a href="mailto:growwithcloveragency@gmail.com">{"Mail"}</a>
                        </div>
                    </div>
                </footer>
            </MeshBackground>
        </div>
    }
}
