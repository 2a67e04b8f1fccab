use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::carousel::{section_visible, Carousel, CarouselTiming, Visibility};
use crate::observe::{self, ObserverOptions, ViewportObserver};
use crate::prefs::UserPreferences;
use crate::scheduler::BrowserScheduler;

struct Step {
    title: &'static str,
    text: &'static str,
    image: &'static str,
    alt: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        title: "Оставьте заявку",
        text: "Заполните короткую форму внизу страницы, это займёт меньше минуты.",
        image: "/assets/step-request.webp",
        alt: "Форма заявки на телефоне",
    },
    Step {
        title: "Обсудим задачу",
        text: "Перезвоним в течение рабочего дня, уточним детали и сроки.",
        image: "/assets/step-call.webp",
        alt: "Менеджер на звонке",
    },
    Step {
        title: "Подготовим предложение",
        text: "Пришлём расчёт стоимости и план работ без скрытых платежей.",
        image: "/assets/step-offer.webp",
        alt: "Коммерческое предложение",
    },
    Step {
        title: "Запускаем работу",
        text: "Подписываем договор и держим вас в курсе на каждом этапе.",
        image: "/assets/step-launch.webp",
        alt: "Команда за работой",
    },
];

const SECTION_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: crate::carousel::VISIBILITY_THRESHOLD,
    root_margin: "0px",
};

type SharedCarousel = Rc<RefCell<Option<Carousel<BrowserScheduler>>>>;

fn with_controller(carousel: &SharedCarousel, f: impl FnOnce(&Carousel<BrowserScheduler>)) {
    if let Some(controller) = carousel.borrow().as_ref() {
        f(controller);
    }
}

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub timing: CarouselTiming,
    pub prefs: UserPreferences,
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    let active = use_state_eq(|| 0usize);
    let section = use_node_ref();
    let carousel = use_mut_ref(|| None::<Carousel<BrowserScheduler>>);

    {
        let active = active.clone();
        let section = section.clone();
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |timing| {
                let observer = match section.cast::<Element>() {
                    None => {
                        log::warn!("steps section missing, carousel disabled");
                        None
                    }
                    Some(section) => {
                        let observed = observe::supported();
                        let visibility = if observed {
                            Visibility::Observed
                        } else {
                            log::info!("no IntersectionObserver, steps advance unconditionally");
                            Visibility::Unobserved
                        };
                        let setter = active.setter();
                        let controller = Carousel::new(
                            STEPS.len(),
                            BrowserScheduler,
                            *timing,
                            visibility,
                            move |i| setter.set(i),
                        );
                        let observer = match (&controller, observed) {
                            (Some(controller), true) => {
                                let watched = controller.clone();
                                match ViewportObserver::new(&SECTION_OBSERVER, move |entry, _| {
                                    watched.visibility_changed(section_visible(
                                        entry.is_intersecting(),
                                        entry.intersection_ratio(),
                                    ));
                                }) {
                                    Ok(observer) => {
                                        observer.observe(&section);
                                        Some(observer)
                                    }
                                    Err(e) => {
                                        log::warn!("steps observer unavailable: {:?}", e);
                                        controller.visibility_changed(true);
                                        None
                                    }
                                }
                            }
                            _ => None,
                        };
                        *carousel.borrow_mut() = controller;
                        observer
                    }
                };

                move || {
                    drop(observer);
                    carousel.borrow_mut().take();
                }
            },
            props.timing,
        );
    }

    let hover_pause = props.prefs.hover_pause_enabled();

    let on_list_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if hover_pause {
                with_controller(&carousel, |c| c.hover_enter());
            }
        })
    };

    let on_list_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if hover_pause {
                with_controller(&carousel, |c| c.hover_leave());
            }
        })
    };

    html! {
        <section id="how-it-works" class="how-it-works" ref={section}>
            <h2>{"Как мы работаем"}</h2>
            <div class="steps-layout">
                <ol class="steps-list" onmouseenter={on_list_enter} onmouseleave={on_list_leave}>
                    { for STEPS.iter().enumerate().map(|(i, step)| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| {
                                with_controller(&carousel, |c| c.activate(i));
                            })
                        };
                        let onmouseenter = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| {
                                if hover_pause {
                                    with_controller(&carousel, |c| c.activate(i));
                                }
                            })
                        };
                        html! {
                            <li
                                class={classes!("step-item", (*active == i).then(|| "active"))}
                                {onclick}
                                {onmouseenter}
                            >
                                <span class="step-number">{i + 1}</span>
                                <div>
                                    <h3>{step.title}</h3>
                                    <p>{step.text}</p>
                                </div>
                            </li>
                        }
                    }) }
                </ol>
                <div class="steps-images">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <img
                            class={classes!("step-image", (*active == i).then(|| "active"))}
                            src={step.image}
                            alt={step.alt}
                            loading="lazy"
                        />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .how-it-works {
                        padding: 6rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .steps-layout {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .steps-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .step-item {
                        display: flex;
                        gap: 1rem;
                        padding: 1.25rem;
                        border-radius: 16px;
                        cursor: pointer;
                        opacity: 0.55;
                        border: 1px solid transparent;
                        transition: opacity 0.3s ease, border-color 0.3s ease, background 0.3s ease;
                    }
                    .step-item.active {
                        opacity: 1;
                        background: rgba(30, 144, 255, 0.08);
                        border-color: rgba(30, 144, 255, 0.3);
                    }
                    .step-number {
                        font-weight: 700;
                        font-size: 1.5rem;
                        color: #1E90FF;
                    }
                    .steps-images {
                        position: relative;
                        aspect-ratio: 4 / 3;
                    }
                    .step-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 24px;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .step-image.active {
                        opacity: 1;
                    }
                    @media (max-width: 768px) {
                        .steps-layout {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
