//! Top-level component: loads the catalog, owns the session vote
//! buffer, and wires submission to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::buffer::VoteBuffer;
use crate::components::{PlacementArea, ResultsView};
use crate::drag::create_drag_signals;
use crate::models::{DensityPoint, Item, ItemAverage};

const WOBBLE_CSS: &str = "@keyframes dish-wobble {\
    from { transform: translate(-50%, -52%) rotate(-2deg); }\
    to { transform: translate(-50%, -48%) rotate(2deg); }\
}";

#[component]
pub fn App() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Item>::new());
    let (buffer, set_buffer) = signal(VoteBuffer::default());
    let (submitting, set_submitting) = signal(false);
    let (averages, set_averages) = signal(Vec::<ItemAverage>::new());
    let (density, set_density) = signal(Vec::<DensityPoint>::new());
    let (results_version, set_results_version) = signal(0u32);
    let drag = create_drag_signals();

    // Catalog, once on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_items().await {
                Ok(list) => set_items.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to load items: {err}").into())
                }
            }
        });
    });

    // Aggregates, on mount and after every successful submission.
    Effect::new(move |_| {
        let _ = results_version.get();
        spawn_local(async move {
            match api::fetch_averages().await {
                Ok(list) => set_averages.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to load averages: {err}").into())
                }
            }
            match api::fetch_density().await {
                Ok(list) => set_density.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to load density: {err}").into())
                }
            }
        });
    });

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }

        let payload = buffer.get_untracked().to_payload();
        if payload.votes.is_empty() {
            alert("Drag at least one dish onto the plane before submitting.");
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match api::submit_votes(&payload).await {
                Ok(response) if response.ok => {
                    alert(&format!("Thanks! {} placements recorded.", response.count));
                    set_results_version.update(|version| *version += 1);
                }
                Ok(_) => {
                    alert("Could not save your placements. Please try again.");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("vote submission failed: {err}").into());
                    // Buffer stays intact so the user can retry.
                    alert("Could not save your placements. Please try again.");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <style>{WOBBLE_CSS}</style>
        <main style="font-family:sans-serif;max-width:640px;margin:0 auto;padding:16px;">
            <h1>"Where does each dish land?"</h1>
            <p>
                "Drag every dish onto the plane: left to right is price, "
                "bottom to top is taste. Submit when you are happy with the layout."
            </p>

            <PlacementArea items=items drag=drag buffer=buffer set_buffer=set_buffer/>

            <div style="text-align:center;margin:48px 0 16px;">
                <button
                    style="padding:10px 24px;font-size:15px;border-radius:8px;border:none;background:#1d4ed8;color:#fff;cursor:pointer;"
                    disabled=move || submitting.get() || buffer.get().is_empty()
                    on:click=submit
                >
                    {move || {
                        if submitting.get() {
                            "Sending...".to_string()
                        } else {
                            format!("Submit {} placements", buffer.get().len())
                        }
                    }}
                </button>
            </div>

            <ResultsView items=items averages=averages density=density buffer=buffer/>
        </main>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
