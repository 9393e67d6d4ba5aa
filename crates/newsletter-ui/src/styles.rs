//! Section stylesheet.

/// Layout and state styles for [`NewsletterSection`](crate::NewsletterSection).
///
/// Include once per page. Palette colors (container, input, button, link)
/// are applied inline by the component; this sheet only carries layout,
/// hover and disabled states, and the success/error boxes.
pub const NEWSLETTER_STYLES: &str = r##"
.newsletter {
    padding: 3rem 1.5rem;
}

.newsletter-content {
    max-width: 560px;
    margin: 0 auto;
}

.newsletter-headline {
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    margin: 0;
}

.newsletter-subheadline {
    font-size: 1.5rem;
    font-weight: 700;
    margin: 0.5rem 0 1.5rem;
}

.newsletter-controls {
    display: flex;
    gap: 0.75rem;
}

.newsletter-input {
    flex: 1;
    padding: 0.75rem 1.25rem;
    border: 1px solid;
    border-radius: 6px;
    font-size: 1rem;
}

.newsletter-input::placeholder {
    color: #9ca3af;
}

.newsletter-button {
    padding: 0.75rem 1.25rem;
    border: 1px solid transparent;
    border-radius: 6px;
    font-weight: 500;
    font-size: 1rem;
    cursor: pointer;
    transition: filter 0.2s;
}

.newsletter-button:hover {
    filter: brightness(1.1);
}

.newsletter-button:disabled {
    opacity: 0.7;
    cursor: not-allowed;
}

.newsletter-error {
    margin-top: 0.5rem;
    font-size: 0.875rem;
    color: #dc2626;
}

.newsletter-success {
    padding: 1rem;
    background: #dcfce7;
    border: 1px solid #4ade80;
    border-radius: 6px;
    color: #15803d;
}

.newsletter-privacy {
    margin-top: 0.75rem;
    font-size: 0.875rem;
}

.newsletter-link {
    font-weight: 500;
    text-decoration: none;
}

.newsletter--dark .newsletter-link:hover {
    color: #a5b4fc;
}

.newsletter--light .newsletter-link:hover {
    color: #4338ca;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}

@media (max-width: 640px) {
    .newsletter-controls {
        flex-direction: column;
    }
}
"##;
