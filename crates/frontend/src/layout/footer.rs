use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__content">
                <div class="footer__grid">
                    <div>
                        <div class="footer__brand">
                            {icon("building")}
                            <span class="footer__brand-name">
                                "Imovelna" <span class="footer__brand-accent">"Web.com"</span>
                            </span>
                        </div>
                        <p class="footer__tagline">"Encontre o imóvel dos seus sonhos conosco."</p>
                    </div>
                    <div>
                        <h3 class="footer__heading">"Institucional"</h3>
                        <ul class="footer__links">
                            <li><a href="#">"Sobre Nós"</a></li>
                            <li><a href="#">"Carreiras"</a></li>
                            <li><a href="#">"Imprensa"</a></li>
                            <li><a href="#">"Contato"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="footer__heading">"Anunciantes"</h3>
                        <ul class="footer__links">
                            <li><a href="#">"Anuncie seu Imóvel"</a></li>
                            <li><a href="#">"Planos e Preços"</a></li>
                            <li><a href="#">"Portal do Corretor"</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer__bottom">
                    <p>"© 2025 ImovelnaWeb.com. Todos os direitos reservados."</p>
                </div>
            </div>
        </footer>
    }
}
