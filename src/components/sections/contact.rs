//! Contact details and the simulated message form.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use log::{debug, warn};

use super::SocialIcons;
use crate::components::contact_form::{ContactForm, SubmitPhase};
use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{DEFAULT_THRESHOLD, entrance, use_reveal};
use crate::content::{Profile, SocialLink};

/// Arm a timer for the end of the current timed phase, chaining into the next
/// one until the form is idle again.
fn schedule_phase_end(form: RwSignal<ContactForm>, pending: StoredValue<Option<TimeoutHandle>>) {
	let Some(dwell) = form.try_with_untracked(|f| f.phase().dwell()).flatten() else {
		return;
	};
	let scheduled = set_timeout_with_handle(
		move || {
			if form.try_update(ContactForm::elapse).unwrap_or(false) {
				schedule_phase_end(form, pending);
			}
		},
		dwell,
	);
	match scheduled {
		Ok(handle) => {
			let _ = pending.try_set_value(Some(handle));
		}
		Err(err) => {
			warn!("contact: phase timer failed, unlocking form: {err:?}");
			let _ = form.try_update(|f| while f.elapse() {});
		}
	}
}

/// Contact details beside the simulated message form.
#[component]
pub fn Contact(profile: Profile, socials: Vec<SocialLink>) -> impl IntoView {
	let section_ref = NodeRef::<html::Section>::new();
	let visible = use_reveal(move || section_ref.get(), DEFAULT_THRESHOLD);

	let form = RwSignal::new(ContactForm::default());
	let pending = StoredValue::new(None::<TimeoutHandle>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if !form.try_update(ContactForm::begin_submit).unwrap_or(false) {
			return;
		}
		debug!("contact: submitting");
		schedule_phase_end(form, pending);
	};

	on_cleanup(move || {
		if let Some(Some(handle)) = pending.try_update_value(Option::take) {
			handle.clear();
		}
	});

	let phase = move || form.with(ContactForm::phase);

	let details = [
		(IconKind::Mail, "Email", profile.email.clone(), Some(profile.mailto())),
		(IconKind::Phone, "Phone", profile.phone.clone(), Some(profile.tel())),
		(IconKind::MapPin, "Location", profile.location.clone(), None),
	]
	.into_iter()
	.map(|(icon, label, value, href)| {
		let body = view! {
			<div class="icon-chip">
				<Icon kind=icon size=18 />
			</div>
			<div>
				<p class="text-muted small">{label}</p>
				<p class="contact-value">{value}</p>
			</div>
		};
		match href {
			Some(href) => view! {
				<a href=href class="contact-item group">
					{body}
					<Icon kind=IconKind::ArrowRight size=16 class="contact-arrow" />
				</a>
			}
			.into_any(),
			None => view! { <div class="contact-item">{body}</div> }.into_any(),
		}
	})
	.collect_view();

	let follow = socials
		.into_iter()
		.filter(|link| link.icon != IconKind::Mail)
		.collect::<Vec<_>>();

	view! {
		<section id="contact" node_ref=section_ref class="page-section contact">
			<div class="contact-wash" />

			<div class="section-padding section-body">
				<div class="section-heading centered">
					<h2 class=entrance("zoom-in elastic", visible)>
						"Let's Build Something " <span class="text-gradient">"Amazing"</span>
					</h2>
					<p
						class=entrance("section-lede from-below", visible)
						style="transition-delay: 200ms;"
					>
						"Have a project in mind? Let's discuss how AI can transform your ideas into reality."
					</p>
				</div>

				<div class="contact-grid">
					<div class=entrance("from-left", visible) style="transition-delay: 300ms;">
						<h3 class="contact-subheading">"Get In Touch"</h3>
						<div class="contact-list">{details}</div>

						<div class="contact-follow">
							<p class="text-muted small">"Follow me on"</p>
							<div class="social-row">
								<SocialIcons links=follow class="social-tile" />
							</div>
						</div>

						<div class="availability">
							<span class="pulse-dot" />
							<span>{profile.availability}</span>
						</div>
					</div>

					<div class=entrance("from-right", visible) style="transition-delay: 400ms;">
						<form class="contact-form" on:submit=on_submit>
							<div class="field">
								<label for="name">"Your Name"</label>
								<input
									type="text"
									id="name"
									required
									placeholder="John Doe"
									prop:value=move || form.with(|f| f.fields.name.clone())
									on:input=move |ev| form.update(|f| f.fields.name = event_target_value(&ev))
								/>
							</div>
							<div class="field">
								<label for="email">"Email Address"</label>
								<input
									type="email"
									id="email"
									required
									placeholder="john@example.com"
									prop:value=move || form.with(|f| f.fields.email.clone())
									on:input=move |ev| form.update(|f| f.fields.email = event_target_value(&ev))
								/>
							</div>
							<div class="field">
								<label for="message">"Your Message"</label>
								<textarea
									id="message"
									required
									rows=4
									placeholder="Tell me about your project..."
									prop:value=move || form.with(|f| f.fields.message.clone())
									on:input=move |ev| form.update(|f| f.fields.message = event_target_value(&ev))
								/>
							</div>
							<button
								type="submit"
								class=move || {
									if phase() == SubmitPhase::Submitted { "btn-primary submit is-sent" } else { "btn-primary submit" }
								}
								disabled=move || phase().is_locked()
							>
								{move || match phase() {
									SubmitPhase::Idle => view! {
										"Send Message"
										<Icon kind=IconKind::Send size=16 />
									}
									.into_any(),
									SubmitPhase::Submitting => view! { <span class="spinner" /> }.into_any(),
									SubmitPhase::Submitted => "Message Sent!".into_any(),
								}}
							</button>
						</form>
					</div>
				</div>
			</div>
		</section>
	}
}
