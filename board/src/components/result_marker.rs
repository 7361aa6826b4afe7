//! Static marker on the results plane, positioned by percentage so
//! it survives any board resize.

use leptos::prelude::*;

#[component]
pub fn ResultMarker(
    name: String,
    image_ref: Option<String>,
    /// Normalized plane coordinates, origin bottom-left.
    x: f64,
    y: f64,
) -> impl IntoView {
    let left = format!("{}%", x * 100.0);
    let top = format!("{}%", (1.0 - y) * 100.0);
    let style = format!(
        "position:absolute;left:{left};top:{top};transform:translate(-50%,-50%);\
         width:48px;height:48px;border-radius:50%;overflow:hidden;background:#fff;\
         border:1px solid #999;display:flex;align-items:center;justify-content:center;\
         font-size:9px;text-align:center;padding:4px;box-shadow:0 1px 3px rgba(0,0,0,0.2);"
    );

    view! {
        <div style=style title=name.clone()>
            {match image_ref {
                Some(src) => view! {
                    <img src=src alt=name.clone() style="width:100%;height:100%;object-fit:cover;"/>
                }
                .into_any(),
                None => view! { <span>{name.clone()}</span> }.into_any(),
            }}
        </div>
    }
}
