//! Referral submission page

use leptos::*;
use solar_core::{FormPhase, Notification, ReferralField, ReferralRequest, Submission, Ticket};
use tracing::debug;
use crate::components::*;
use crate::context::use_site;

#[component]
pub fn ReferPage() -> impl IntoView {
    let site = use_site();
    let reward = site.config.reward_label();
    let reward_headline = site.config.reward_headline();

    let submission = create_rw_signal(Submission::new(ReferralRequest::default()));

    // Leaving the page abandons a pending submission
    on_cleanup(move || {
        let _ = submission.try_update(Submission::cancel);
    });

    let submit = create_action(move |(ticket, request): &(Ticket, ReferralRequest)| {
        let (ticket, request) = (*ticket, request.clone());
        let site = site.clone();

        async move {
            let outcome = site.service.submit_referral(&request).await;
            if let Some(settled) = submission.try_update(|s| s.settle(ticket, outcome)).flatten() {
                site.notify(Notification::for_outcome(settled));
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match submission.try_update(Submission::begin) {
            Some(Ok(pending)) => submit.dispatch(pending),
            Some(Err(err)) => debug!(%err, "referral submit ignored"),
            None => {}
        }
    };

    let submitting = move || submission.with(Submission::is_submitting);
    let value = move |field: ReferralField| {
        Signal::derive(move || submission.with(|s| field.get(s.request()).to_string()))
    };
    let on_input = move |field: ReferralField| {
        Callback::new(move |text: String| submission.update(|s| s.edit(|r| field.apply(r, text))))
    };

    let field = move |field: ReferralField, input_type: &'static str, placeholder: &'static str| {
        view! {
            <FormField
                id=field.id()
                label=field.label()
                input_type=input_type
                placeholder=placeholder
                required=ReferralField::REQUIRED.contains(&field)
                value=value(field)
                on_input=on_input(field)
            />
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-b from-sky-100 to-white py-12">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                // Header
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold text-gray-900 mb-4">"Submit a Solar Referral"</h1>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                        {format!(
                            "Know someone interested in solar installation? Refer them and earn {reward} \
                             when they complete their solar setup!"
                        )}
                    </p>
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    // Form
                    <div class="lg:col-span-2">
                        <div class="bg-white rounded-xl shadow-lg p-8">
                            <h2 class="flex items-center gap-2 text-2xl font-semibold text-gray-900">
                                <span>"👥"</span>
                                "Referral Details"
                            </h2>
                            <p class="text-gray-600 mt-1 mb-6">"Fill in the details below to submit your solar referral"</p>

                            <form on:submit=on_submit class="space-y-6">
                                <div class="space-y-4">
                                    <h3 class="text-lg font-semibold text-gray-900">"👤 Your Information"</h3>
                                    <div class="grid sm:grid-cols-2 gap-4">
                                        {field(ReferralField::ReferrerName, "text", "Enter your full name")}
                                        {field(ReferralField::ReferrerPhone, "tel", "+91 98765 43210")}
                                    </div>
                                </div>

                                <div class="space-y-4">
                                    <h3 class="text-lg font-semibold text-gray-900">"📞 Customer Information"</h3>
                                    <div class="grid sm:grid-cols-2 gap-4">
                                        {field(ReferralField::CustomerName, "text", "Enter customer's full name")}
                                        {field(ReferralField::CustomerPhone, "tel", "+91 98765 43210")}
                                    </div>
                                    {field(ReferralField::Address, "text", "Enter customer's address or area")}
                                </div>

                                <div class="space-y-4">
                                    <h3 class="text-lg font-semibold text-gray-900">"📝 Additional Information"</h3>
                                    <FormField
                                        id=ReferralField::Notes.id()
                                        label=ReferralField::Notes.label()
                                        placeholder="Any additional information about the customer or their requirements..."
                                        required=false
                                        rows=4
                                        value=value(ReferralField::Notes)
                                        on_input=on_input(ReferralField::Notes)
                                    />
                                </div>

                                <button
                                    type="submit"
                                    class="w-full py-4 bg-orange-500 hover:bg-orange-600 disabled:opacity-60 disabled:cursor-not-allowed text-white text-lg font-semibold rounded-lg shadow transition"
                                    disabled=submitting
                                >
                                    {move || if submitting() { "Submitting..." } else { "Submit Referral" }}
                                </button>

                                {move || match submission.with(|s| s.phase().clone()) {
                                    FormPhase::Failed(message) => Some(view! {
                                        <p class="text-sm text-red-600 text-center">{message}" Please try again."</p>
                                    }),
                                    _ => None,
                                }}
                            </form>
                        </div>
                    </div>

                    // Sidebar
                    <div class="space-y-6">
                        <RewardCard
                            icon="🏆"
                            title="Reward Information"
                            amount=reward_headline
                            caption="Reward per successful installation"
                            items=vec![
                                "Instant UPI transfer once installation is completed",
                                "SMS notification with redemption coupon",
                                "No processing fees or hidden charges",
                                "Track your referral status online",
                            ]
                        />
                        <HelpCard blurb="Have questions about the referral process? We're here to help!"/>
                    </div>
                </div>
            </div>
        </div>
    }
}
