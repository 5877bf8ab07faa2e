// name the built-in template is registered under
pub const ADOC_TEMPLATE_NAME: &str = "adoc";

pub const ADOC_TEMPLATE: &str = r#"= Pinboard Links
:toc:
:toclevels: 1

{% if reading_list %}== Reading List{% endif %}

{% for item in reading_list %}
* <<{{ item.slug }},{{ item.description }}>>
{% endfor %}

{% for tag, bookmark in tags|items %}
{% if tag %}== {{ tag }}{% else %}== No Tags{% endif %}

[#{{ bookmark.slug }}]
=== {{ bookmark.description }}

{% if bookmark.extended %}{{ bookmark.extended }}{% endif %}
Notes:: <<{{ bookmark.slug }}.adoc#>>
Date Collected:: {{ bookmark.time }}
Tags:: {{ bookmark.tags }}
To Read:: {{ bookmark.toread }}
{% endfor %}
"#;
