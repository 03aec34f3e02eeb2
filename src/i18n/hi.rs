//! Hindi translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "BuildCost अनुमानक".into());

    // Report
    t.insert("report.title".into(), "निर्माण लागत अनुमान".into());
    t.insert("report.generated".into(), "तैयार किया गया".into());
    t.insert("report.project".into(), "परियोजना विवरण".into());
    t.insert("report.project_kind".into(), "परियोजना प्रकार".into());
    t.insert("report.quality_tier".into(), "गुणवत्ता".into());
    t.insert("report.area_per_floor".into(), "प्रति मंज़िल क्षेत्रफल".into());
    t.insert("report.floors".into(), "मंज़िलें".into());
    t.insert("report.total_area".into(), "कुल क्षेत्रफल".into());
    t.insert("report.price_per_area".into(), "प्रति इकाई क्षेत्रफल दर".into());
    t.insert("report.cost_breakdown".into(), "लागत विवरण".into());
    t.insert("report.base_cost".into(), "मूल लागत".into());
    t.insert("report.material_cost".into(), "सामग्री".into());
    t.insert("report.labor_cost".into(), "श्रम".into());
    t.insert("report.overhead_cost".into(), "अन्य खर्च".into());
    t.insert("report.additional_features".into(), "अतिरिक्त सुविधाएँ".into());
    t.insert("report.no_features".into(), "कोई नहीं चुनी गई".into());
    t.insert("report.additional_cost".into(), "अतिरिक्त लागत".into());
    t.insert("report.total_cost".into(), "कुल लागत".into());
    t.insert("report.timeline".into(), "अनुमानित समय".into());
    t.insert("report.months".into(), "महीने".into());
    t.insert("report.disclaimer".into(), "यह एक सांकेतिक अनुमान है। अंतिम मूल्य साइट सर्वेक्षण, डिज़ाइन और सामग्री के चयन पर निर्भर करता है।".into());

    // Errors
    t.insert("error.unable_to_calculate".into(), "अनुमान की गणना नहीं हो सकी".into());
    t.insert("error.hint.kind".into(), "मान्य परियोजना प्रकार चुनें".into());
    t.insert("error.hint.tier".into(), "मान्य गुणवत्ता स्तर चुनें".into());
    t.insert("error.hint.area".into(), "मान्य क्षेत्रफल दर्ज करें".into());
    t.insert("error.hint.floors".into(), "मंज़िलों की पूर्ण संख्या दर्ज करें (1 या अधिक)".into());

    // Pricing table listing
    t.insert("pricing.title".into(), "मूल्य सूची".into());
    t.insert("pricing.flat".into(), "निश्चित".into());
    t.insert("pricing.per_area".into(), "प्रति इकाई क्षेत्रफल".into());
    t.insert("pricing.incomplete".into(), "उपलब्ध नहीं".into());

    // Project kinds
    t.insert("kind.construction".into(), "निर्माण".into());
    t.insert("kind.interior".into(), "इंटीरियर डिज़ाइन".into());

    // Quality tiers
    t.insert("tier.basic".into(), "बेसिक".into());
    t.insert("tier.standard".into(), "स्टैंडर्ड".into());
    t.insert("tier.premium".into(), "प्रीमियम".into());
    t.insert("tier.luxury".into(), "लग्ज़री".into());

    // Features
    t.insert("feature.parking".into(), "पार्किंग".into());
    t.insert("feature.landscaping".into(), "लैंडस्केपिंग".into());
    t.insert("feature.compoundWall".into(), "चारदीवारी".into());
    t.insert("feature.solarPower".into(), "सौर ऊर्जा".into());
    t.insert("feature.homeAutomation".into(), "होम ऑटोमेशन".into());
    t.insert("feature.swimmingPool".into(), "स्विमिंग पूल".into());

    t
}
