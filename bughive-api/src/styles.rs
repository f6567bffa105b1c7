pub const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --rose: #d7827e;
    --pine: #286983;
    --foam: #56949f;
    --iris: #907aa9;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
a { color: var(--pine); text-decoration: none; }
ul { list-style: none; }
.container { max-width: 1200px; margin: 0 auto; padding: 1.5rem; }

.nav { background: var(--surface); border-bottom: 2px solid var(--overlay); position: sticky; top: 0; z-index: 20; }
.nav__inner { max-width: 1200px; margin: 0 auto; padding: 0.75rem 1.5rem; display: flex; align-items: center; gap: 1.5rem; }
.nav__logo { display: flex; align-items: center; gap: 0.5rem; font-weight: 800; color: var(--love); }
.nav__logo-mark { font-size: 1.5rem; }
.nav__links { display: flex; gap: 0.25rem; flex: 1; }
.nav__link { padding: 0.5rem 0.75rem; border-radius: 8px; color: var(--subtle); font-weight: 600; }
.nav__link[aria-current="page"] { background: var(--overlay); color: var(--text); }
.nav__actions { display: flex; align-items: center; gap: 0.75rem; }
.nav__user { display: flex; align-items: center; gap: 0.5rem; }
.nav__user-name { font-weight: 600; }
.nav__user-stats { color: var(--muted); font-size: 0.8rem; }
.nav__menu-toggle { display: none; background: none; border: none; font-size: 1.4rem; cursor: pointer; }
@media (max-width: 800px) {
    .nav__menu-toggle { display: block; }
    .nav__links { display: none; position: absolute; top: 100%; left: 0; right: 0; flex-direction: column; background: var(--surface); padding: 1rem; }
    .nav__links--open { display: flex; }
    .nav__user-summary { display: none; }
}

.page-header { display: flex; justify-content: space-between; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
.page-header__title { font-size: clamp(1.6rem, 4vw, 2.2rem); font-weight: 800; }
.page-header__subtitle { color: var(--subtle); }
.section-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }

.card { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.25rem; margin-bottom: 1rem; }
.card__header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.card__title { font-size: 1.1rem; font-weight: 700; margin-bottom: 0.75rem; }

.button { display: inline-block; padding: 0.6rem 1.2rem; border-radius: 8px; border: 2px solid transparent; font-weight: 600; cursor: pointer; background: var(--overlay); color: var(--text); }
.button:disabled { opacity: 0.5; cursor: not-allowed; }
.button--hero { background: var(--love); color: var(--base); }
.button--outline { background: transparent; border-color: var(--overlay); }
.button--ghost { background: transparent; }
.button--small { padding: 0.35rem 0.75rem; font-size: 0.85rem; }

.badge { display: inline-flex; align-items: center; gap: 0.25rem; padding: 0.15rem 0.6rem; border-radius: 999px; font-size: 0.75rem; font-weight: 600; background: var(--overlay); }
.badge--outline { background: transparent; border: 1px solid var(--muted); }
.badge--gaming { background: linear-gradient(90deg, var(--iris), var(--love)); color: var(--base); }
.badge--success, .badge--status-resolved { background: #dcefe3; color: #2f6b46; }
.badge--warning, .badge--status-in_progress { background: #fbeedb; color: #9a6217; }
.badge--danger, .badge--critical { background: #fce8ec; color: var(--love); }
.badge--high { background: #fbe5dc; color: var(--rose); }
.badge--medium { background: #fbeedb; color: var(--gold); }
.badge--low { background: #e1eef1; color: var(--foam); }
.badge--status-open { background: #e0ebf1; color: var(--pine); }
.badge--status-closed { background: var(--overlay); color: var(--muted); }
.badge__remove { background: none; border: none; cursor: pointer; color: inherit; }
.badge-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 0.75rem; }

.avatar { display: inline-flex; align-items: center; justify-content: center; width: 2.25rem; height: 2.25rem; border-radius: 50%; background: var(--iris); color: var(--base); font-weight: 700; object-fit: cover; }
.avatar--large { width: 5rem; height: 5rem; font-size: 1.6rem; }

.stats-grid, .stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
.stat { display: flex; flex-direction: column; align-items: center; gap: 0.25rem; }
.stat__icon { font-size: 1.5rem; }
.stat__value { font-size: 1.6rem; }
.stat__label { color: var(--subtle); font-size: 0.85rem; }

.dashboard, .submit-layout, .assistant-layout { display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; }
@media (max-width: 900px) { .dashboard, .submit-layout, .assistant-layout { grid-template-columns: 1fr; } }
.quick-action { display: flex; justify-content: space-between; align-items: center; padding: 0.6rem 0; color: var(--text); border-bottom: 1px solid var(--overlay); }
.your-stats { display: grid; grid-template-columns: 1fr auto; gap: 0.4rem; }
.your-stats dt { color: var(--subtle); }
.your-stats dd { font-weight: 700; }

.filters { display: flex; flex-direction: column; gap: 0.75rem; }
.filters__selects { display: flex; gap: 0.75rem; flex-wrap: wrap; }
.status-chips { display: grid; grid-template-columns: repeat(5, 1fr); gap: 0.5rem; margin-bottom: 1rem; }
.status-chip { display: flex; flex-direction: column; align-items: center; padding: 0.6rem; border: 2px solid var(--overlay); border-radius: 10px; background: var(--surface); cursor: pointer; color: var(--text); }
.status-chip--active { border-color: var(--love); }
.status-chip__count { font-size: 1.3rem; }
.status-chip__label { font-size: 0.8rem; color: var(--subtle); }
.tabs { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.tabs--compact { margin-bottom: 0.5rem; }
.tab { padding: 0.4rem 0.9rem; border-radius: 8px; border: none; background: var(--overlay); color: var(--subtle); cursor: pointer; font-weight: 600; }
.tab--active { background: var(--pine); color: var(--base); }

.bug-list__items { display: flex; flex-direction: column; gap: 0.75rem; }
.bug-list__more { text-align: center; margin-top: 1rem; }
.bug-card { display: flex; gap: 1rem; }
.bug-card__summary { flex: 1; min-width: 0; }
.bug-card__header { display: flex; justify-content: space-between; gap: 0.75rem; }
.bug-card__title { font-size: 1.05rem; font-weight: 700; }
.bug-card__badges, .bug-card__labels { display: flex; gap: 0.35rem; flex-wrap: wrap; margin: 0.4rem 0; }
.bug-card__description { color: var(--subtle); margin: 0.4rem 0; }
.bug-card__meta { display: flex; gap: 1rem; align-items: center; color: var(--muted); font-size: 0.85rem; }
.bug-card__author { display: flex; align-items: center; gap: 0.4rem; }
.vote { display: flex; flex-direction: column; align-items: center; gap: 0.25rem; }
.vote--pending { opacity: 0.6; }
.vote__button { background: var(--overlay); border: none; border-radius: 6px; width: 2rem; height: 2rem; cursor: pointer; color: var(--subtle); }
.vote__button--active { background: var(--pine); color: var(--base); }
.vote__count { font-weight: 800; }

.leaderboard__item { display: flex; align-items: center; gap: 0.75rem; padding: 0.6rem 0; border-bottom: 1px solid var(--overlay); }
.leaderboard__item--podium { background: linear-gradient(90deg, #fbeedb, transparent); border-radius: 8px; padding-left: 0.5rem; }
.leaderboard__rank { font-size: 1.3rem; width: 2rem; text-align: center; }
.leaderboard__info { flex: 1; }
.leaderboard__name { font-weight: 700; }
.leaderboard__contributions { color: var(--muted); font-size: 0.8rem; }
.leaderboard__badges { display: flex; gap: 0.25rem; }
.leaderboard__points { font-weight: 800; color: var(--love); }
.leaderboard__more { text-align: center; margin-top: 0.75rem; }
.spotlight-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
.spotlight { display: flex; flex-direction: column; align-items: center; gap: 0.4rem; text-align: center; }
.spotlight--first { border-color: var(--gold); }
.spotlight--second { border-color: var(--muted); }
.spotlight__name { font-weight: 800; }
.spotlight__points { font-size: 1.8rem; font-weight: 800; color: var(--love); }
.spotlight__caption { color: var(--subtle); font-size: 0.8rem; }
.spotlight__stats { display: flex; gap: 1rem; font-size: 0.85rem; }

.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1rem; }
.project__description { color: var(--subtle); margin-bottom: 0.75rem; }
.project__repo { font-size: 0.85rem; }
.project__counts, .project__footer { display: flex; justify-content: space-between; font-size: 0.85rem; color: var(--muted); margin: 0.5rem 0; }
.project__progress-label { font-size: 0.8rem; color: var(--subtle); }
.project__maintainers { display: flex; }
.project__activity { font-size: 0.8rem; }
.progress { display: flex; height: 8px; border-radius: 999px; overflow: hidden; background: var(--overlay); margin: 0.25rem 0 0.75rem; }
.progress__bar--resolved { background: var(--pine); }
.progress__bar--in-progress { background: var(--gold); }

.notification-bell { position: relative; background: none; border: none; font-size: 1.3rem; cursor: pointer; }
.notification-bell__count { position: absolute; top: -4px; right: -8px; background: var(--love); color: var(--base); border-radius: 999px; font-size: 0.65rem; padding: 0.05rem 0.35rem; }
.overlay { position: fixed; inset: 0; background: rgba(87, 82, 121, 0.2); z-index: 30; }
.notification-panel { position: fixed; top: 4rem; right: 1.5rem; width: min(420px, 92vw); max-height: 75vh; overflow-y: auto; z-index: 40; }
.notification-panel__controls { display: flex; justify-content: space-between; align-items: center; }
.notification { display: flex; gap: 0.75rem; padding: 0.75rem 0; border-bottom: 1px solid var(--overlay); }
.notification--unread { background: #f6efe8; }
.notification__icon { font-size: 1.2rem; }
.notification__body { flex: 1; }
.notification__heading { display: flex; align-items: center; gap: 0.4rem; }
.notification__title { font-weight: 700; }
.notification__dot { width: 8px; height: 8px; border-radius: 50%; background: var(--love); }
.notification__message { color: var(--subtle); font-size: 0.9rem; }
.notification__meta, .notification__time { color: var(--muted); font-size: 0.75rem; }
.notification__footer { text-align: center; padding-top: 0.75rem; }

.profile { display: flex; gap: 1.5rem; align-items: flex-start; }
.profile__name { font-size: 1.6rem; font-weight: 800; }
.profile__username { color: var(--muted); }
.profile__bio { margin: 0.5rem 0; }
.profile__facts { display: flex; gap: 1rem; flex-wrap: wrap; color: var(--subtle); font-size: 0.85rem; }
.profile-badge__icon { font-size: 1.6rem; }
.profile-badge__date { color: var(--muted); font-size: 0.75rem; }

.field { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; flex: 1; }
.field-row { display: flex; gap: 1rem; flex-wrap: wrap; }
.field__label { font-weight: 600; font-size: 0.9rem; }
.field__input { padding: 0.65rem 0.9rem; border: 2px solid var(--overlay); border-radius: 8px; background: var(--surface); color: var(--text); font-size: 0.95rem; font-family: inherit; }
.field__input:focus { outline: none; border-color: var(--pine); }
.field__input--area { min-height: 7rem; resize: vertical; }
.submission-form__section { padding-bottom: 1rem; margin-bottom: 1rem; border-bottom: 1px solid var(--overlay); }
.submission-form__heading { font-weight: 700; margin-bottom: 0.75rem; }
.submission-form__actions { display: flex; justify-content: space-between; align-items: center; }
.label-input { display: flex; gap: 0.5rem; }
.label-list, .attachment-list { display: flex; gap: 0.4rem; flex-wrap: wrap; margin-top: 0.5rem; }
.attachment { display: flex; align-items: center; gap: 0.5rem; background: var(--overlay); border-radius: 8px; padding: 0.25rem 0.5rem; }
.attachment__size { color: var(--muted); font-size: 0.8rem; }
.tips li { margin-bottom: 0.5rem; color: var(--subtle); }
.success { text-align: center; }
.success__icon { font-size: 3rem; }
.success__actions { display: flex; gap: 0.75rem; justify-content: center; margin-top: 1rem; }

.chat { display: flex; flex-direction: column; min-height: 70vh; }
.chat__messages { flex: 1; display: flex; flex-direction: column; gap: 0.75rem; overflow-y: auto; margin-bottom: 1rem; }
.chat__message { max-width: 85%; padding: 0.75rem 1rem; border-radius: 12px; }
.chat__message--assistant { background: var(--overlay); align-self: flex-start; }
.chat__message--user { background: var(--pine); color: var(--base); align-self: flex-end; }
.chat__content { white-space: pre-line; }
.chat__time { font-size: 0.7rem; opacity: 0.7; }
.chat__typing { font-style: italic; color: var(--muted); }
.chat__suggestions { display: flex; flex-direction: column; gap: 0.5rem; margin-top: 0.5rem; }
.chat__quick { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 0.75rem; }
.chat__input { display: flex; gap: 0.5rem; }
.chat__input .field__input { flex: 1; }
.suggestion { display: flex; gap: 0.5rem; background: var(--surface); border-radius: 8px; padding: 0.5rem; }
.suggestion__title { font-weight: 700; }
.suggestion__description { font-size: 0.85rem; color: var(--subtle); }
.confidence { font-size: 0.75rem; font-weight: 700; }
.confidence--high { color: #2f6b46; }
.confidence--medium { color: var(--gold); }
.confidence--low { color: var(--love); }
.capability { display: flex; gap: 0.75rem; margin-bottom: 0.75rem; }
.capability__icon { font-size: 1.4rem; }
.capability p { color: var(--subtle); font-size: 0.85rem; }

.empty { text-align: center; padding: 2.5rem; }
.empty__icon { font-size: 3rem; }
.empty__hint { color: var(--subtle); margin: 0.5rem 0 1rem; }
.loading { display: flex; flex-direction: column; align-items: center; padding: 3rem; }
.loading__spinner {
    width: 50px; height: 50px; border: 4px solid var(--overlay);
    border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 1rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.error__retry, .error__dismiss { margin-top: 1rem; margin-right: 0.5rem; padding: 0.5rem 1rem; background: var(--love); color: var(--base); border: none; border-radius: 4px; cursor: pointer; }
.error__dismiss { background: transparent; color: var(--love); border: 1px solid var(--love); }
"#;
