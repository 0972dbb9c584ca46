impl Documind {
    fn render_title_bar(&self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("title-bar")
            .w_full()
            .h(px(36.))
            .flex_shrink_0()
            .relative()
            .flex()
            .items_center()
            .bg(cx.theme().title_bar)
            .border_b_1()
            .border_color(cx.theme().title_bar_border)
            .child(
                div()
                    .id("title-drag-area")
                    .absolute()
                    .top_0()
                    .left_0()
                    .right_0()
                    .bottom_0()
                    .on_double_click(|_, window, _| window.titlebar_double_click())
                    .window_control_area(WindowControlArea::Drag),
            )
            .child(
                div()
                    .flex_1()
                    .px_3()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Documind"),
            )
            .when(!cfg!(target_os = "macos"), |this| {
                this.child(
                    div()
                        .h_full()
                        .pr_1()
                        .flex()
                        .items_center()
                        .gap_1()
                        .child(
                            Button::new("window-minimize")
                                .ghost()
                                .small()
                                .icon(
                                    Icon::new(crate::icons::IconName::WindowMinimize)
                                        .text_color(cx.theme().foreground),
                                )
                                .on_click(|_, window, _| window.minimize_window()),
                        )
                        .child(
                            Button::new("window-maximize")
                                .ghost()
                                .small()
                                .icon(
                                    Icon::new(if window.is_maximized() {
                                        crate::icons::IconName::WindowRestore
                                    } else {
                                        crate::icons::IconName::WindowMaximize
                                    })
                                    .text_color(cx.theme().foreground),
                                )
                                .on_click(|_, window, _| window.zoom_window()),
                        )
                        .child(
                            Button::new("window-close")
                                .ghost()
                                .small()
                                .icon(
                                    Icon::new(crate::icons::IconName::WindowClose)
                                        .text_color(cx.theme().foreground),
                                )
                                .on_click(|_, window, _| window.remove_window()),
                        ),
                )
            })
    }
}
