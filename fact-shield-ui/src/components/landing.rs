use crate::components::claims_panel::ClaimsPanel;
use crate::hooks::use_claims;
use fact_shield_core::ClaimStatus;
use leptos::*;

#[component]
fn Point(title: &'static str, children: Children) -> impl IntoView {
    view! {
      <div class="point">
        <span class="point-dot"></span>
        <div>
          <div class="point-title">{title}</div>
          <div class="point-text">{children()}</div>
        </div>
      </div>
    }
}

#[component]
fn Blurb(title: &'static str, children: Children) -> impl IntoView {
    view! {
      <div>
        <div class="blurb-title">{title}</div>
        <p class="blurb-text">{children()}</p>
      </div>
    }
}

#[component]
pub fn Landing(#[prop(into)] on_go_sign_in: Callback<()>) -> impl IntoView {
    let trues = use_claims(ClaimStatus::True);
    let falses = use_claims(ClaimStatus::False);

    view! {
      <div class="container main-container">
        <section class="card card-hero">
          <div class="hero-grid">
            <div>
              <h1 class="hero-title">"Fact\u{a0}Shield"</h1>
              <p class="hero-subtitle">
                "A distributed fact-checking orchestration platform that "
                <strong>
                  "connects platforms, government datasets, and independent fact-checkers"
                </strong>
                " to verify viral claims at scale."
              </p>
              <div class="hero-points">
                <Point title="Neutral, Interoperable API">
                  "Platforms (Meta, X, TikTok) submit claims via a standardized endpoint and \
                   receive transparent, source-cited decisions."
                </Point>
                <Point title="AI + Human in the Loop">
                  "LLM + knowledge graph do first-pass verification with government/NGO data. \
                   Ambiguous cases escalate to certified fact-checkers."
                </Point>
                <Point title="Transparent & Privacy-Preserving">
                  "Every decision cites sources; personal data is never processed\u{2014}only \
                   public claims and datasets."
                </Point>
              </div>
              <div class="hero-cta">
                <button class="btn btn-primary" on:click=move |_| on_go_sign_in.call(())>
                  "Sign in as Fact-Checker"
                </button>
                <a class="btn btn-ghost" href="#" on:click=|ev| ev.prevent_default()>
                  "API Docs (coming soon)"
                </a>
              </div>
            </div>

            <div class="hero-card">
              <div class="hero-mini-title">"How it works"</div>
              <ol class="howitworks">
                <li>
                  <strong>"Submit:"</strong>
                  " Platforms send a claim to "
                  <code>"/verify-claim"</code>
                  "."
                </li>
                <li><strong>"Triage:"</strong>" LLM + RAG match against government datasets."</li>
                <li>
                  <strong>"Decide:"</strong>
                  " Clear matches return "
                  <em>"True/False"</em>
                  " with citations."
                </li>
                <li><strong>"Escalate:"</strong>" Unclear claims go to the fact-checker pool."</li>
                <li>
                  <strong>"Consensus:"</strong>
                  " Weighted votes finalize the outcome and update the knowledge base."
                </li>
              </ol>
            </div>
          </div>
        </section>

        <section class="cards-2col">
          <ClaimsPanel title="Verified True" color="#10b981" state=trues/>
          <ClaimsPanel title="Verified False" color="#ef4444" state=falses/>
        </section>

        <section class="card" style="margin-top: 20px">
          <h3 class="section-title">"Trust, Governance & Ethics"</h3>
          <div class="two-col">
            <Blurb title="Datasets">
              "Designed to ingest government and international data (e.g., Stats NZ, WHO, UN) \
               for first-level automated validation with "
              <strong>"source links"</strong>
              " in responses."
            </Blurb>
            <Blurb title="Reputation-Weighted Voting">
              "Fact-checker decisions are weighted by track record and bias-safety checks, \
               preventing single-reviewer dominance."
            </Blurb>
            <Blurb title="Privacy by Design">
              "No personal data processed. The system evaluates "
              <em>"claims"</em>
              " against "
              <em>"public"</em>
              " sources only."
            </Blurb>
            <Blurb title="Auditability">
              "Every verdict includes a rationale and dataset references for downstream \
               transparency and appeals."
            </Blurb>
          </div>
        </section>
      </div>
    }
}
