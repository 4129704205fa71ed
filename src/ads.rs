//! Advertisement capability
//!
//! The simulation never talks to an ad SDK directly: the host injects an
//! [`AdProvider`] at startup and the game is fully playable without one.
//! Events reported by a request are advisory only — they are logged, not
//! wired to pause/resume.

/// Advisory events reported by an ad request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdEvent {
    Started,
    Finished,
    Error(String),
}

/// Optional external advertisement capability
pub trait AdProvider {
    /// Whether the backing SDK is reachable right now
    fn available(&self) -> bool;

    /// Fire-and-forget midgame ad request. Failure is reported through
    /// `AdEvent::Error` and is non-fatal; the simulation keeps ticking.
    fn request_midgame(&self, on_event: Box<dyn FnMut(AdEvent)>);
}

/// Default provider used when no SDK is present
pub struct NoopAds;

impl AdProvider for NoopAds {
    fn available(&self) -> bool {
        false
    }

    fn request_midgame(&self, _on_event: Box<dyn FnMut(AdEvent)>) {
        log::warn!("ad SDK not available, ignoring midgame ad request");
    }
}

/// Log an advisory ad event
pub fn log_ad_event(event: AdEvent) {
    match event {
        AdEvent::Started => log::info!("midgame ad started"),
        AdEvent::Finished => log::info!("midgame ad finished"),
        AdEvent::Error(message) => log::error!("midgame ad error: {message}"),
    }
}

#[cfg(target_arch = "wasm32")]
pub mod sdk {
    //! CrazyGames SDK bridge, probed from the page's global object.

    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    use super::{AdEvent, AdProvider};

    pub struct SdkAds;

    impl SdkAds {
        /// Probe the page for the SDK object. Absence is logged and
        /// non-fatal; the caller falls back to [`super::NoopAds`].
        pub fn detect() -> Option<Self> {
            if sdk_object().is_some() {
                log::info!("CrazyGames SDK detected");
                Some(Self)
            } else {
                log::warn!("CrazyGames SDK not available");
                None
            }
        }

        /// Kick off `SDK.init()` in the background, logging the outcome.
        pub fn init(&self) {
            let Some(sdk) = sdk_object() else { return };
            let Some(init) = get_function(&sdk, "init") else {
                log::warn!("CrazyGames SDK has no init()");
                return;
            };
            match init.call0(&sdk) {
                Ok(value) => {
                    if let Ok(promise) = value.dyn_into::<Promise>() {
                        wasm_bindgen_futures::spawn_local(async move {
                            match JsFuture::from(promise).await {
                                Ok(_) => log::info!("CrazyGames SDK initialized"),
                                Err(err) => {
                                    log::error!("CrazyGames SDK init failed: {err:?}")
                                }
                            }
                        });
                    }
                }
                Err(err) => log::error!("CrazyGames SDK init failed: {err:?}"),
            }
        }
    }

    impl AdProvider for SdkAds {
        fn available(&self) -> bool {
            sdk_object().is_some()
        }

        fn request_midgame(&self, on_event: Box<dyn FnMut(AdEvent)>) {
            let Some(sdk) = sdk_object() else {
                log::warn!("CrazyGames SDK not available");
                return;
            };
            let Some(ad) = get_object(&sdk, "ad") else {
                log::warn!("CrazyGames SDK has no ad module");
                return;
            };
            let Some(request) = get_function(&ad, "requestAd") else {
                log::warn!("CrazyGames SDK ad module has no requestAd()");
                return;
            };

            let on_event = Rc::new(RefCell::new(on_event));
            let callbacks = Object::new();

            {
                let on_event = on_event.clone();
                let started = Closure::<dyn FnMut()>::new(move || {
                    (on_event.borrow_mut())(AdEvent::Started);
                });
                let _ = Reflect::set(&callbacks, &"adStarted".into(), started.as_ref());
                started.forget();
            }
            {
                let on_event = on_event.clone();
                let finished = Closure::<dyn FnMut()>::new(move || {
                    (on_event.borrow_mut())(AdEvent::Finished);
                });
                let _ = Reflect::set(&callbacks, &"adFinished".into(), finished.as_ref());
                finished.forget();
            }
            {
                let error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
                    let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
                    (on_event.borrow_mut())(AdEvent::Error(message));
                });
                let _ = Reflect::set(&callbacks, &"adError".into(), error.as_ref());
                error.forget();
            }

            if let Err(err) = request.call2(&ad, &"midgame".into(), &callbacks) {
                log::error!("midgame ad request failed: {err:?}");
            }
        }
    }

    fn sdk_object() -> Option<Object> {
        let window = web_sys::window()?;
        let crazy = get_object(&window, "CrazyGames")?;
        get_object(&crazy, "SDK")
    }

    fn get_object(target: &JsValue, key: &str) -> Option<Object> {
        Reflect::get(target, &key.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.dyn_into::<Object>().ok())
    }

    fn get_function(target: &JsValue, key: &str) -> Option<Function> {
        Reflect::get(target, &key.into())
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
    }
}
