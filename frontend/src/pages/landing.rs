use std::rc::Rc;

use yew::prelude::*;

use crate::carousel::CarouselTiming;
use crate::components::contact_form::ContactForm;
use crate::components::how_it_works::HowItWorks;
use crate::components::scroll_progress::ScrollProgress;
use crate::config::LandingConfig;
use crate::prefs::UserPreferences;
use crate::reveal::use_reveal;
use crate::spotlight::use_spotlight;

const BENEFITS: &[(&str, &str)] = &[
    ("Быстрый старт", "Первые результаты уже через неделю после созвона."),
    ("Прозрачная цена", "Фиксируем бюджет в договоре, без доплат по ходу работы."),
    ("Личный менеджер", "Один человек на связи от заявки до сдачи проекта."),
    ("Гарантия", "Бесплатно исправим недочёты в течение трёх месяцев."),
    ("Отчёты", "Еженедельный отчёт о сделанном и планах."),
    ("Поддержка", "Поможем и после запуска, если что-то пойдёт не так."),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<LandingConfig>,
    pub prefs: UserPreferences,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let root = use_node_ref();
    use_reveal(root.clone(), props.prefs);
    use_spotlight(root.clone(), props.prefs);

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

    let config = &props.config;

    html! {
        <div class="landing-page" ref={root}>
            <ScrollProgress config={config.clone()} prefs={props.prefs} />

            <header class="hero">
                <div class="hero-content">
                    <h1>{"Делаем сайты, которые приводят клиентов"}</h1>
                    <p class="hero-subtitle">
                        {"Берём на себя дизайн, разработку и запуск. Вы занимаетесь бизнесом, мы отвечаем за заявки."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="forward-link">
                            <button class="hero-cta">{"Оставить заявку"}</button>
                        </a>
                        <a href="#how-it-works" class="faq-link">{"Как это работает"}</a>
                    </div>
                </div>
            </header>

            <section id="benefits" class="benefits">
                <h2>{"Почему выбирают нас"}</h2>
                <div class="cards-grid">
                    { for BENEFITS.iter().map(|(title, text)| html! {
                        <div class="card spotlight">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <HowItWorks timing={CarouselTiming::from(&**config)} prefs={props.prefs} />

            <section class="showcase">
                <div class="panel spotlight">
                    <h3>{"Под ключ"}</h3>
                    <p>{"От первого макета до подключения аналитики и рекламы."}</p>
                </div>
                <div class="panel spotlight">
                    <h3>{"С опорой на цифры"}</h3>
                    <p>{"Каждое решение проверяем на реальных посетителях."}</p>
                </div>
            </section>

            <ContactForm
                endpoint={config.contact_endpoint.clone()}
                status_hide_ms={config.status_hide_ms}
            />

            <footer class="footer-cta">
                <p class="disclaimer">{"© Студия. Все права защищены."}</p>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #1a1a1a;
                        color: #ffffff;
                        overflow-x: hidden;
                    }
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 8rem 2rem 4rem;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        max-width: 900px;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        color: #999;
                        font-size: 1.25rem;
                        max-width: 640px;
                        margin: 1.5rem auto 2.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .hero-cta {
                        background: #1E90FF;
                        color: #fff;
                        border: none;
                        border-radius: 999px;
                        padding: 1rem 2rem;
                        font-size: 1.05rem;
                        cursor: pointer;
                    }
                    .faq-link {
                        color: #7EB2FF;
                    }
                    .benefits {
                        padding: 6rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .cards-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .card, .panel {
                        position: relative;
                        background: rgba(30, 30, 30, 0.8);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 24px;
                        padding: 2rem;
                        overflow: hidden;
                    }
                    .spotlight::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(320px circle at var(--spot-x, 50%) var(--spot-y, 50%), rgba(30, 144, 255, 0.15), transparent 60%);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .spotlight:hover::before {
                        opacity: 1;
                    }
                    .showcase {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        padding: 4rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .reveal {
                        opacity: 0;
                        transition: opacity 0.7s ease, transform 0.7s ease;
                        transition-delay: var(--reveal-delay, 0ms);
                    }
                    .reveal[data-reveal="up"] { transform: translateY(32px); }
                    .reveal[data-reveal="left"] { transform: translateX(-48px); }
                    .reveal[data-reveal="right"] { transform: translateX(48px); }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }
                    .footer-cta {
                        padding: 3rem 2rem;
                        text-align: center;
                        color: #666;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.2rem;
                        }
                        .cards-grid, .showcase {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
