//! Page templates. Rust pre-computes every width-dependent string; templates
//! only pick styles and arrange lines.

pub const GALLERY_TEMPLATE: &str = r#"{{ "Statue Gallery" | style("heading") }}
{{ showing | style("muted") }}
{% if filters %}
{{ "Filters:" | style("label") }} {{ filters | join(", ") }}
{% endif %}
{% if view == "list" %}
{% for card in cards %}
{{ card.index | style("id") }} {{ card.title_col | style("title") }} {{ card.artist_col | style("artist") }} {{ card.price_col | style("price") }}{% for badge in card.badges %} {{ badge.text | style(badge.style) }}{% endfor %}

{% endfor %}
{% else %}
{% for card in cards %}

{{ card.index | style("id") }} {{ card.title | style("title") }}{% for badge in card.badges %} {{ badge.text | style(badge.style) }}{% endfor %}

    {{ card.artist | style("artist") }}
    {{ card.price | style("price") }}{% if card.original_price %} {{ card.original_price | style("original_price") }}{% endif %}

    {{ card.material }} · {{ card.height }} · {{ card.category }}
    {{ card.link | style("muted") }}
{% endfor %}
{% endif %}"#;

pub const ARTISTS_TEMPLATE: &str = r#"{{ "Artists" | style("heading") }}
{{ showing | style("muted") }}
{% for artist in artists %}

{{ artist.name | style("title") }}{% if artist.verified %} {{ "Verified" | style("badge") }}{% endif %}

    {{ artist.location }} · Est. {{ artist.established }} · {{ artist.total_works }} works
    {{ artist.specialties | style("muted") }}
    {{ artist.bio }}
    {{ "Featured:" | style("label") }} {{ artist.featured_name }} {{ artist.featured_price | style("price") }}
{% endfor %}"#;

pub const COLLECTIONS_TEMPLATE: &str = r#"{{ "Collections" | style("heading") }}
{{ showing | style("muted") }}
{% for section in sections %}
{% if section.cards %}

{{ section.title | style("title") }}
{% for card in section.cards %}

  {{ card.name | style("title") }} {{ card.theme | style("badge") }}
    Curated by {{ card.curator | style("artist") }} · {{ card.item_count }} pieces · {{ card.created }}
    {{ card.description }}
    {% for tag in card.tags %}#{{ tag }} {% endfor %}{% if card.more %}{{ card.more | style("muted") }}{% endif %}

{% endfor %}
{% endif %}
{% endfor %}"#;

pub const FACETS_TEMPLATE: &str = r#"{{ heading | style("heading") }}
{% for facet in facets %}
{{ facet.name_col | style("label") }} {{ facet.options | join(", ") }}
{% endfor %}
{% if price %}
{{ price.name_col | style("label") }} {{ price.range }}
{% endif %}"#;

pub const STATUE_TEMPLATE: &str = r#"{{ title | style("title") }}{% for badge in badges %} {{ badge.text | style(badge.style) }}{% endfor %}

by {{ artist | style("artist") }}
{{ price | style("price") }}{% if original_price %} {{ original_price | style("original_price") }}{% endif %}

{% if rating %}
{{ rating.stars | style("stars") }} {{ rating.score }} ({{ rating.reviews }} reviews)
{% endif %}
{% for row in facts %}
{{ row.label | style("label") }} {{ row.value }}
{% endfor %}
{% if stock %}
{{ stock.text | style(stock.style) }}
{% endif %}

{% for tab in tabs %}{% if tab.active %}{{ tab.name | style("active") }}{% else %}{{ tab.name | style("muted") }}{% endif %}  {% endfor %}

{% for line in tab_body %}
{{ line }}
{% endfor %}

{{ "Quantity:" | style("label") }} {{ quantity }}
{{ "Cart after adding:" | style("label") }} {{ cart_summary }}
{{ perks | join(" · ") | style("muted") }}
{{ "3D preview:" | style("label") }} {{ viewer }}"#;

pub const CART_TEMPLATE: &str = r#"{{ "Shopping Cart" | style("heading") }}
{% for line in lines %}

{{ line.id | style("id") }} {{ line.name | style("title") }} by {{ line.artist | style("artist") }}
    {{ line.details | style("muted") }}
    {{ line.quantity }} × {{ line.price }} = {{ line.total | style("price") }}
{% endfor %}
{% if summary %}

{{ "Order Summary" | style("title") }}
{% for row in summary %}
{% if row.is_total %}{{ row.label | style("total") }} {{ row.value | style("total") }}{% else %}{{ row.label | style("label") }} {{ row.value }}{% endif %}

{% endfor %}
{% endif %}"#;

pub const PROFILE_TEMPLATE: &str = r#"{{ initials | style("badge") }} {{ name | style("title") }}
{{ email | style("muted") }}
{{ badges | join(" · ") | style("badge") }}

{% for tab in tabs %}{% if tab.active %}{{ tab.name | style("active") }}{% else %}{{ tab.name | style("muted") }}{% endif %}  {% endfor %}

{% for section in sections %}

{{ section.title | style("title") }}
{% for row in section.rows %}
  {{ row.label | style("label") }} {{ row.value }}
{% endfor %}
{% if not section.rows %}
  {{ section.empty | style("muted") }}
{% endif %}
{% endfor %}"#;

pub const SCENE_TEMPLATE: &str = r#"{% if slide %}
{{ slide.position | style("muted") }}
{{ slide.name | style("title") }} {{ slide.price | style("price") }}
{{ slide.description }}
{{ "Color:" | style("label") }} {{ slide.color }}

{% endif %}
{{ "Camera:" | style("label") }} {{ camera }}
{% for light in lights %}
{{ "Light:" | style("label") }} {{ light }}
{% endfor %}
{{ "Frames:" | style("label") }} {{ frames }}

{{ outline }}"#;

pub const ABOUT_TEMPLATE: &str = r#"{{ headline | style("heading") }}
{{ intro }}

{{ "Our Story" | style("title") }}
{% for paragraph in story %}
{{ paragraph }}

{% endfor %}
{% for stat in stats %}
  {{ stat.value | style("price") }} {{ stat.label }}
{% endfor %}

{{ "Our Values" | style("title") }}
{% for value in values %}
  {{ value.title | style("title") }}: {{ value.description }}
{% endfor %}

{{ "Meet Our Team" | style("title") }}
{% for member in team %}
  {{ member.name | style("title") }}, {{ member.role | style("artist") }}
    {{ member.bio }}
{% endfor %}"#;

pub const TEXT_LIST_TEMPLATE: &str = r#"{% if lines %}{% for line in lines %}{{ line }}
{% endfor %}{% else %}{{ empty_message | style("muted") }}
{% endif %}"#;
