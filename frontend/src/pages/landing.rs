use crate::components::carousel::ProductCarousel;
use crate::components::waitlist_form::WaitlistForm;
use yew::prelude::*;

const FEATURES: [&str; 3] = ["📋 Kanban Board", "💬 Conversation Tracker", "🤖 AI Summaries"];

#[function_component(Landing)]
pub fn landing() -> Html {
    let landing_css = r#"
        .landing-page {
            position: relative;
            min-height: 100vh;
            overflow: hidden;
            background: linear-gradient(to bottom, #111827, #000 50%, #000);
            color: #fff;
        }
        .landing-blobs {
            position: absolute;
            inset: 0;
            overflow: hidden;
            pointer-events: none;
        }
        .landing-blob {
            position: absolute;
            width: 18rem;
            height: 18rem;
            border-radius: 9999px;
            background: #31B19E;
            filter: blur(64px);
            opacity: 0.1;
            animation: blob 7s infinite;
        }
        .landing-blob.one { top: 5rem; left: 5rem; }
        .landing-blob.two { top: 10rem; right: 5rem; animation-delay: 2s; }
        .landing-blob.three { bottom: -2rem; left: 50%; animation-delay: 4s; }
        .landing-main {
            position: relative;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            padding: 3rem 1.5rem;
        }
        .landing-content {
            width: 100%;
            max-width: 42rem;
            text-align: center;
        }
        .landing-title {
            font-size: 4.5rem;
            font-weight: 700;
            letter-spacing: -0.025em;
            background: linear-gradient(to right, #fff, #9ca3af);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .landing-tagline {
            font-size: 1.5rem;
            font-weight: 300;
            color: #9ca3af;
        }
        .landing-description {
            max-width: 36rem;
            margin: 2rem auto 1rem;
            font-size: 1.125rem;
            line-height: 1.625;
            color: #d1d5db;
        }
        .landing-features {
            display: flex;
            flex-wrap: wrap;
            gap: 0.75rem;
            justify-content: center;
        }
        .landing-feature {
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            background: rgba(31, 41, 55, 0.5);
            border: 1px solid #374151;
            font-size: 0.875rem;
            color: #d1d5db;
        }
        .landing-footer {
            margin-top: 4rem;
            font-size: 0.875rem;
            color: #4b5563;
        }
        @keyframes blob {
            0%, 100% { transform: translate(0, 0) scale(1); }
            33% { transform: translate(30px, -50px) scale(1.1); }
            66% { transform: translate(-20px, 20px) scale(0.9); }
        }
        @media (max-width: 768px) {
            .landing-title { font-size: 3rem; }
            .landing-tagline { font-size: 1.25rem; }
        }
    "#;
    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{landing_css}</style>
            <div class="landing-blobs">
                <div class="landing-blob one"></div>
                <div class="landing-blob two"></div>
                <div class="landing-blob three"></div>
            </div>
            <main class="landing-main">
                <div class="landing-content">
                    <h1 class="landing-title">{"JobTrackPath"}</h1>
                    <p class="landing-tagline">{"Track your job applications with ease"}</p>
                    <p class="landing-description">
                        {"Manage your job search journey with a powerful Kanban board, track conversations with recruiters, and get AI-powered insights."}
                    </p>
                    <div class="landing-features">
                        { for FEATURES.iter().map(|feature| html! {
                            <span class="landing-feature">{*feature}</span>
                        }) }
                    </div>
                    <ProductCarousel />
                    <WaitlistForm />
                    <footer class="landing-footer">
                        <p>{"© 2026 JobTrackPath. All rights reserved."}</p>
                    </footer>
                </div>
            </main>
        </div>
    }
}
