//! The 500x500 voting plane with its axis lines and captions.

use leptos::prelude::*;

use crate::drag::CHART_BOARD_ID;

#[component]
pub fn ChartBoard(
    /// DOM id; the placement surface resolves its drop bounds by it.
    #[prop(default = CHART_BOARD_ID)]
    id: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            id=id
            style="position:relative;width:500px;height:500px;border:1px solid #ccc;margin:0 auto;user-select:none;background:#fafafa;"
        >
            // Quadrant axis lines
            <div style="position:absolute;top:50%;left:0;width:100%;height:1px;background-color:#ddd;pointer-events:none;"></div>
            <div style="position:absolute;left:50%;top:0;width:1px;height:100%;background-color:#ddd;pointer-events:none;"></div>

            <div style="position:absolute;left:50%;bottom:-24px;transform:translateX(-50%);font-size:12px;">
                "Cheap ← Price → Pricey"
            </div>
            <div style="position:absolute;top:50%;left:-10px;transform:translateY(-50%) rotate(-90deg);transform-origin:left center;font-size:12px;">
                "Meh ← Taste → Delicious"
            </div>

            {children.map(|children| children())}
        </div>
    }
}
