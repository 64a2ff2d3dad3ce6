use contracts::domain::property::Property;
use leptos::prelude::*;

use crate::shared::format::{format_area, format_price};
use crate::shared::icons::icon;

/// Grid card used on the home page. Pure projection over one listing.
#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let cover = property.images.first().cloned();

    view! {
        <div class="property-card">
            {cover.map(|src| view! {
                <img class="property-card__image" src=src alt=property.title.clone() />
            })}
            <div class="property-card__body">
                <p class="property-card__price">{format_price(property.price)}</p>
                <h3 class="property-card__title">{property.title.clone()}</h3>
                <div class="property-card__location">
                    {icon("map-pin")}
                    <span>{format!("{}, {}", property.address.city, property.address.state)}</span>
                </div>
                <div class="property-card__facts">
                    <div class="property-card__fact">
                        {icon("bed")}
                        <span>{property.bedrooms}</span>
                    </div>
                    <div class="property-card__fact">
                        {icon("bath")}
                        <span>{property.bathrooms}</span>
                    </div>
                    <div class="property-card__fact">
                        {icon("ruler")}
                        <span>{format_area(property.area)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
